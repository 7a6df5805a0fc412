use crate::structs::analysis_report::AnalysisReport;

pub struct ReportLogger;

impl ReportLogger {
    pub fn print_report(report: &AnalysisReport) {
        let width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(60)
            .min(80);

        println!("\n📊 ROI ANALYSIS REPORT");
        println!("{}", "=".repeat(width));

        if !report.summary.is_empty() {
            println!("📄 {}\n", report.summary);
        }

        println!("📈 LEADING INDICATORS ({} total):", report.leading_indicators.len());
        for indicator in &report.leading_indicators {
            println!(
                "  {} {} [score {}/10, {}]",
                indicator.status.glyph(),
                indicator.name,
                indicator.score,
                indicator.status.label()
            );
            println!("      {}", indicator.description);
        }

        println!("\n💰 LAGGING INDICATORS ({} total):", report.lagging_indicators.len());
        for indicator in &report.lagging_indicators {
            println!(
                "  📌 {} [impact: {}, timeline: {}]",
                indicator.name,
                indicator.impact.label(),
                indicator.timeline
            );
            println!("      {}", indicator.description);
        }

        println!("\n🎯 RECOMMENDATIONS ({} total):", report.recommendations.len());
        for (i, recommendation) in report.recommendations.iter().enumerate() {
            println!(
                "  {}. {} {} [{} priority, {}]",
                i + 1,
                recommendation.priority.glyph(),
                recommendation.title,
                recommendation.priority.label(),
                recommendation.timeline
            );
            println!("      {}", recommendation.description);
        }

        println!("{}", "=".repeat(width));
    }
}
