// Cross-cutting prompt fragments. Service-specific prompts live in a
// prompts.rs next to the service that uses them.

/// Appended to every system prompt that expects machine-readable output.
pub const JSON_ONLY_SYSTEM: &str = "Respond with valid JSON only. \
    No prose before or after the JSON, no markdown code fences, no comments.";
