//! Role instructions and prompt builders for the analysis stages
//!
//! Each builder is a pure function of the current review state; prompt
//! text is deterministic for a given state, which keeps runs reproducible
//! under a deterministic generator.

use crate::types::{ReportField, ReviewState};

/// Persona for the contextualize and feature-extraction stages
pub const REVIEWER_ROLE: &str = "You are an expert software engineer reviewing a pull request.";

/// Persona for the three-reviewer panel stage
pub const PANEL_ROLE: &str =
    "You are an expert AI system well versed in software engineering. You are currently reviewing a pull request.";

/// Persona for the final synthesis stage
pub const SYNTHESIZER_ROLE: &str =
    "You are an AI entity with the goal of reducing suffering in the universe, increasing prosperity in the universe and increasing understanding in the universe.";

fn change_json(state: &ReviewState) -> String {
    serde_json::to_string_pretty(&state.change).unwrap_or_default()
}

fn state_json(state: &ReviewState) -> String {
    serde_json::to_string_pretty(state).unwrap_or_default()
}

fn report_text(state: &ReviewState, field: ReportField) -> &str {
    state.report(field).map_or("", |r| r.text())
}

/// Prompt for the contextualize stage
pub fn contextualize(state: &ReviewState) -> String {
    format!(
        "Below is the information extracted from the PR:\n\n\
         ```json\n{change}\n```\n\n\
         Based on the data provided, please analyze the following:\n\
         1. What could be the possible motivation behind this PR?\n\
         2. What specific problem or issue might this PR be trying to solve?\n\
         3. How do the changes in the PR relate to the overall codebase? Consider potential impacts on functionality, performance, security, and maintainability.\n\
         4. Speculate on the intent of the author. Why might they have made these specific changes? What are the potential benefits or risks?\n\
         5. List any questions or concerns that arise from this PR, which might require further clarification from the author or additional review.\n\n\
         Please provide a detailed and thoughtful analysis, using all the available information and your expert knowledge.",
        change = change_json(state)
    )
}

/// Prompt for the feature-extraction stage
pub fn extract_features(state: &ReviewState) -> String {
    format!(
        "Based on the following pull request information and contextual analysis, identify the new features or technical changes introduced by this PR:\n\n\
         PR Information:\n```json\n{change}\n```\n\n\
         Contextual Analysis:\n```txt\n{context}\n```\n\n\
         Please provide a detailed breakdown of the new features, technical changes, and any relevant implications.",
        change = change_json(state),
        context = report_text(state, ReportField::Context)
    )
}

/// Prompt for the expert panel stage
pub fn expert_panel(state: &ReviewState) -> String {
    format!(
        "You are about to perform an expert-level review of a pull request. Below, you'll find detailed information about the PR, including the extracted context and identified features. You will adopt the mindset of three different expert personas, each focusing on a critical aspect of code quality.\n\n\
         PR Information:\n```json\n{change}\n```\n\n\
         Contextual Analysis:\n```\n{context}\n```\n\n\
         Identified Features:\n```\n{features}\n```\n\n\
         Please provide a detailed review from each of the following perspectives:\n\n\
         1. **Code Quality Guru**\n   - Focus on readability, maintainability, and overall structure. Consider best practices, documentation, and ease of understanding. Identify issues or areas for improvement in code quality and maintainability.\n\n\
         2. **Performance Wizard**\n   - Focus on performance and efficiency. Consider speed, resource usage, scalability, and identify bottlenecks or inefficiencies. Suggest optimizations if necessary.\n\n\
         3. **Security Sentinel**\n   - Focus on security and compliance. Consider security vulnerabilities, data handling, and industry standards compliance. Highlight security risks or concerns and suggest improvements.\n\n\
         **Review Structure**:\n\
         Each persona should provide a detailed, thoughtful review with specific points that a human reviewer might want to double-check or consider further. Each review should include the persona name and a thorough analysis of the PR from their perspective.\n\n\
         Code Quality Guru Review:\nName: Code Quality Guru\nReview:\n[Your analysis here]\n\n\
         Performance Wizard Review:\nName: Performance Wizard\nReview:\n[Your analysis here]\n\n\
         Security Sentinel Review:\nName: Security Sentinel\nReview:\n[Your analysis here]\n\n\
         Think deeply about the potential motivations behind the PR, the implications of the changes, and any areas that could be optimized or improved.",
        change = change_json(state),
        context = report_text(state, ReportField::Context),
        features = report_text(state, ReportField::Features)
    )
}

/// Prompt for the final review stage
pub fn final_review(state: &ReviewState) -> String {
    format!(
        "You are tasked with performing an expert-level review of a pull request (PR) using information compiled. Below is structured data about the PR, including context, key features, and evaluations from a team of different AI agents.\n\n\
         **PR Data:**\n```json\n{state}\n```\n\n\
         **Task:**\n\
         Your goal is to create a focused and highly actionable PR review. The review should prioritize specific, targeted feedback that directly addresses key pain points in the code, offering immediate suggestions for improvement. Each comment should be quoting a specific line or section of the code, aiming for clarity and impact.\n\n\
         **Guidelines for the Review:**\n\n\
         1. **Contextual Summary:**\n   - Briefly summarize the purpose of the PR, including the assumptions made on its context, the problem it seems to address, and the key changes introduced.\n\n\
         2. **Key Changes Overview:**\n   - List the primary changes made in the PR, providing a clear, high-level but thorough understanding of the modifications.\n\n\
         3. **Focused, Actionable Comments:**\n   - Provide a series of specific, actionable comments that address identified issues or areas for improvement in the code.\n   - Each comment should:\n     - Reference a specific line or section of the code.\n     - Clearly explain the issue or potential improvement.\n     - Offer a concrete suggestion or solution that can be implemented immediately.\n\n\
         4. **General Cautions (Optional):**\n   - If applicable, include a section for general cautions or remarks that don't fit into the specific comments but are important for future consideration. These should still be concise and actionable where possible.\n\n\
         5. **Approval Recommendation:**\n   - Conclude with a clear recommendation:\n     - [ ] Request Changes: Significant issues need to be addressed.\n     - [ ] Approve with Comments: Minor changes or clarifications are recommended.\n     - [ ] Approve: The PR is ready for merge.\n\n\
         **Formatting Template:**\n\n\
         ```\n\
         **PR Review Summary**\n\n\
         **Title:** [Concise PR title]\n\n\
         **Context:**\n- [Brief summary of the PR's purpose and context]\n\n\
         **Key Changes:**\n- [List of key changes made in the PR]\n\n\
         **Specific Comments:**\n\
         [Detailed, actionable comment on a specific issue]\n\
         ```\ncode X\n```\n\n\
         [Detailed, actionable comment on a specific issue]\n\
         ```\ncode Y\n```\n\n\
         ...\n\n\
         **General Cautions:**\n- [Optional section for general remarks or cautions]\n\n\
         **Approval Recommendation:**\n- [Choose one: Request Changes / Approve with Comments / Approve]\n\
         ```",
        state = state_json(state)
    )
}
