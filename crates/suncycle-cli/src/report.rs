//! Human-readable stdout report.

use suncycle_analysis::{hypothesis::BinomialTest, pipeline::AnalysisReport};
use suncycle_stats::descriptive::DescriptiveStats;

pub(crate) fn print(analysis: &AnalysisReport) {
    print_midpoints(analysis);
    println!();
    print_test(
        &analysis.above_median,
        "Count above median (CyclePercentile > 0.5)",
        "Binomial two-sided p-value (H0: p = 0.5)",
    );
    println!();
    print_test(
        &analysis.top_quartile,
        "Count in top quartile (CyclePercentile > 0.75)",
        "Binomial upper-tail p-value (H0: p = 0.25)",
    );
    println!();
    println!("Summary of cycle percentiles:");
    match &analysis.percentile_stats {
        Some(stats) => print_summary(stats),
        None => println!("  (no events)"),
    }
}

fn print_midpoints(analysis: &AnalysisReport) {
    println!("Event midpoint sunspot percentiles (relative to full history):");
    println!(
        "{:>10} {:>12} {:>16}",
        "Mid_Date", "Sunspot_mid", "CyclePercentile"
    );

    // Display order only; the analysis keeps segmentation order.
    let mut events: Vec<_> = analysis.events.iter().collect();
    events.sort_by_key(|event| event.mid_date);
    for event in events {
        let metric = event
            .mid_metric
            .map_or_else(|| "NaN".to_owned(), |value| format!("{value:.4}"));
        println!(
            "{:>10} {metric:>12} {:>16.4}",
            event.mid_date.to_string(),
            event.cycle_percentile
        );
    }
}

fn print_test(test: &BinomialTest, count_label: &str, p_label: &str) {
    println!("{count_label}: {} of {}", test.successes, test.trials);
    println!("{p_label}: {:.3}", test.p_value);
}

fn print_summary(stats: &DescriptiveStats) {
    println!("  count {:>12}", stats.count);
    println!("  mean  {:>12.6}", stats.mean);
    println!("  std   {:>12.6}", stats.std_dev);
    println!("  min   {:>12.6}", stats.min);
    println!("  25%   {:>12.6}", stats.q1);
    println!("  50%   {:>12.6}", stats.median);
    println!("  75%   {:>12.6}", stats.q3);
    println!("  max   {:>12.6}", stats.max);
}
