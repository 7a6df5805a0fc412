pub mod roi_analysis_prompt;
