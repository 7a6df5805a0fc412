/// System instruction sent with every analysis. The model is asked for a
/// single JSON object; the endpoint trusts its adherence to this shape and
/// falls back to a fixed report only when the reply is not JSON at all.
pub const ROI_ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an expert ROI analyst for project management. Analyze the provided project document and extract:

1. Leading Indicators (early signals of success):
   - User adoption metrics
   - Engagement levels
   - Team capability uptake
   - Process efficiency improvements
   - Stakeholder sentiment

2. Lagging Indicators (final outcomes):
   - Cost savings
   - Revenue impact
   - Productivity gains
   - Retention improvements
   - Time savings

3. Recommendations & Next Steps:
   - Specific actions to improve leading indicators
   - Risk mitigation strategies
   - Resource allocation suggestions
   - Timeline adjustments

Format your response as a JSON object with the following structure:
{
  "summary": "Brief project overview",
  "leadingIndicators": [
    {
      "name": "Indicator name",
      "description": "What this measures",
      "score": 8,
      "status": "Good/At Risk/Needs Attention"
    }
  ],
  "laggingIndicators": [
    {
      "name": "Indicator name", 
      "description": "Expected outcome",
      "impact": "High/Medium/Low",
      "timeline": "Expected timeframe"
    }
  ],
  "recommendations": [
    {
      "title": "Action item",
      "description": "Detailed description",
      "priority": "High/Medium/Low",
      "timeline": "When to implement"
    }
  ]
}"#;

/// Prefix of the user message; the decoded document text is appended as-is.
pub const ANALYZE_USER_PREFIX: &str =
    "Please analyze this project document and provide ROI indicators and recommendations:\n\n";

#[cfg(test)]
mod tests {
    use super::*;

    // The instruction text is fixed byte-for-byte, including the stray space
    // after the lagging-indicator name line in the schema block.
    #[test]
    fn schema_block_text_is_byte_exact() {
        assert!(ROI_ANALYSIS_SYSTEM_PROMPT
            .contains("\"laggingIndicators\": [\n    {\n      \"name\": \"Indicator name\", \n"));
        assert!(ROI_ANALYSIS_SYSTEM_PROMPT
            .contains("\"leadingIndicators\": [\n    {\n      \"name\": \"Indicator name\",\n"));
        assert!(ANALYZE_USER_PREFIX.ends_with(":\n\n"));
    }
}
