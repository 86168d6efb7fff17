//! Prompt template for the error-analysis task.
//!
//! The section headings, instruction list, and response skeleton are fixed:
//! the model is steered to answer under `### Error Analysis`,
//! `### Recommended Solutions`, and `### Corrected Code` so downstream
//! consumers see a consistently-shaped reply.

/// Render the analysis prompt, substituting the three values verbatim.
///
/// No validation or sanitisation is applied; empty strings are accepted.
pub fn build_prompt(language: &str, code: &str, error: &str) -> String {
    format!(
        r#"[TASK]
Analyze this {language} code error and suggest fixes.

[CODE]
{code}

[ERROR]
{error}

[INSTRUCTIONS]
1. Explain root cause in simple terms
2. Provide 1-3 solutions (mark best option)
3. Show corrected code example
4. List common pitfalls to avoid

[RESPONSE FORMAT]
### Error Analysis
{{analysis}}

### Recommended Solutions
1. {{solution_1}} (⭐ Best)
2. {{solution_2}}
3. {{solution_3}}

### Corrected Code
```{language}
{{fixed_code}}
```
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_values_verbatim() {
        let prompt = build_prompt(
            "python",
            "print(undefined_variable)",
            "NameError: name 'undefined_variable' is not defined",
        );
        assert!(prompt.contains("Analyze this python code error"));
        assert!(prompt.contains("print(undefined_variable)"));
        assert!(prompt.contains("NameError: name 'undefined_variable' is not defined"));
    }

    #[test]
    fn carries_the_instruction_list() {
        let prompt = build_prompt("rust", "fn main() {}", "E0308");
        assert!(prompt.contains("1. Explain root cause in simple terms"));
        assert!(prompt.contains("2. Provide 1-3 solutions (mark best option)"));
        assert!(prompt.contains("3. Show corrected code example"));
        assert!(prompt.contains("4. List common pitfalls to avoid"));
    }

    #[test]
    fn carries_the_response_skeleton() {
        let prompt = build_prompt("rust", "fn main() {}", "E0308");
        assert!(prompt.contains("### Error Analysis"));
        assert!(prompt.contains("### Recommended Solutions"));
        assert!(prompt.contains("### Corrected Code"));
        assert!(prompt.contains("(⭐ Best)"));
    }

    #[test]
    fn fences_the_corrected_code_as_the_given_language() {
        let prompt = build_prompt("js", "console.log(x)", "ReferenceError");
        assert!(prompt.contains("```js"));
    }

    #[test]
    fn accepts_empty_inputs() {
        let prompt = build_prompt("", "", "");
        assert!(prompt.contains("[TASK]"));
        assert!(prompt.contains("[CODE]"));
        assert!(prompt.contains("[ERROR]"));
    }
}
