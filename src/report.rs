use crate::analysis::AnalysisReport;
use crate::stats::ttest::{TestResult, Verdict};

// ---------------------------------------------------------------------------
// Console report
// ---------------------------------------------------------------------------

/// Print the textual summary: descriptive statistics, the four hypothesis
/// tests with their verdict sentences, the suggested-company list and a
/// closing conclusion block. Pure formatting over the structured report.
pub fn print_report(report: &AnalysisReport) {
    println!("Population Mean Average Salary: {}", report.population.mean);
    println!("Population Standard Deviation: {}", report.population.std_dev);
    println!("Sample Mean Average Salary: {}", report.sample.mean);
    println!("Sample Standard Deviation: {}", report.sample.std_dev);

    print_test(
        "Two-tailed Hypothesis Testing for Sample vs. Population Mean:",
        "The sample mean is equal to the population mean.",
        "The sample mean is not equal to the population mean.",
        &report.sample_two_sided,
        "The sample mean significantly differs from the population mean.",
        "The sample mean does not significantly differ from the population mean.",
    );

    print_test(
        "One-tailed Hypothesis Testing for Sample vs. Population Mean (Greater):",
        "The sample mean is less than or equal to the population mean.",
        "The sample mean is greater than the population mean.",
        &report.sample_greater,
        "The sample mean is significantly greater than the population mean.",
        "The sample mean is not significantly greater than the population mean.",
    );

    print_test(
        "One-tailed Hypothesis Testing for Sample vs. Population Mean (Less):",
        "The sample mean is greater than or equal to the population mean.",
        "The sample mean is less than the population mean.",
        &report.sample_less,
        "The sample mean is significantly less than the population mean.",
        "The sample mean is not significantly less than the population mean.",
    );

    println!("\nSuggested Companies based on your expected salary:");
    if report.suggested.is_empty() {
        println!("(none reach {})", report.expected_salary);
    } else {
        println!("{:<40} {:>8} {:>14}", "Company", "Rating", "Average");
        for m in &report.suggested {
            let rating = m
                .rating
                .map(|r| format!("{r:.1}"))
                .unwrap_or_else(|| "n/a".to_string());
            println!("{:<40} {:>8} {:>14.1}", m.company, rating, m.average);
        }
    }

    println!("\nHypothesis Testing for Expected Salary:");
    println!("Expected Salary: {}", report.expected_salary);
    print_test(
        "",
        "The population mean is equal to the expected salary.",
        "The population mean is not equal to the expected salary.",
        &report.expected_two_sided,
        "The population mean significantly differs from the expected salary.",
        "The population mean does not significantly differ from the expected salary.",
    );

    print_conclusion(report);
}

fn print_test(
    title: &str,
    null_hypothesis: &str,
    alternative_hypothesis: &str,
    result: &TestResult,
    reject_sentence: &str,
    accept_sentence: &str,
) {
    if !title.is_empty() {
        println!("\n{title}");
    }
    println!("Null Hypothesis (H0): {null_hypothesis}");
    println!("Alternative Hypothesis (H1): {alternative_hypothesis}");
    println!("T-statistic: {}", result.statistic);
    println!("P-value: {}", result.p_value);
    match result.verdict {
        Verdict::Reject => println!("Reject the null hypothesis: {reject_sentence}"),
        Verdict::Accept => println!("Accept the null hypothesis: {accept_sentence}"),
    }
}

fn print_conclusion(report: &AnalysisReport) {
    println!("\nConclusion and Analysis:");
    println!(
        "Two-tailed T-statistic: {}, P-value: {}",
        report.sample_two_sided.statistic, report.sample_two_sided.p_value
    );
    println!(
        "One-tailed (greater) T-statistic: {}, P-value: {}",
        report.sample_greater.statistic, report.sample_greater.p_value
    );
    println!(
        "One-tailed (less) T-statistic: {}, P-value: {}",
        report.sample_less.statistic, report.sample_less.p_value
    );
    println!(
        "Expected-salary T-statistic: {}, P-value: {}",
        report.expected_two_sided.statistic, report.expected_two_sided.p_value
    );

    let differs = matches!(report.sample_two_sided.verdict, Verdict::Reject);
    println!(
        "The sample mean {} from the population mean at alpha = 0.05.",
        if differs {
            "significantly differs"
        } else {
            "does not significantly differ"
        }
    );
    let expected_differs = matches!(report.expected_two_sided.verdict, Verdict::Reject);
    println!(
        "The population mean {} from the expected salary at alpha = 0.05.",
        if expected_differs {
            "significantly differs"
        } else {
            "does not significantly differ"
        }
    );
}
