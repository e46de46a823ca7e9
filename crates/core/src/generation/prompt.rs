/// Output contract the model is asked to follow.
pub const SCHEMA_DIRECTIVE: &str = "\
Return ONLY JSON with the following structure: {
  \"files\": [ { \"path\": string, \"content\": string } ],
  \"meta\": object
}. No prose, no markdown. Ensure valid JSON.";

/// Stack the generated prototype should target.
pub const STACK_GUIDANCE: &str = "\
You generate a minimal full-stack prototype using React + Vite + TypeScript for frontend and FastAPI for backend. \
Prefer small, working examples. Keep paths POSIX (use forward slashes).";

/// Build the instruction sent to the model for a generate request.
///
/// Layout: schema directive, stack guidance, the user prompt and, when
/// present and non-empty, a trailing context section.
pub fn build_instruction(prompt: &str, context: Option<&str>) -> String {
    let context = match context {
        Some(ctx) if !ctx.is_empty() => format!("\nContext:\n{ctx}"),
        _ => String::new(),
    };

    format!("{SCHEMA_DIRECTIVE}\n{STACK_GUIDANCE}\nUser Prompt:\n{prompt}{context}")
}
