use crate::models::ClientInfo;

pub const CONSULTANT_SYSTEM: &str = include_str!("../data/prompts/consultant_system.txt");
pub const FIRST_RUN: &str = include_str!("../data/prompts/first_run.txt");

/// Placeholder for a project with no name yet.
const UNSPECIFIED: &str = "غير محدد";
/// Placeholder for the remaining optional client fields.
const EMPTY_FIELD: &str = "-";

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

fn field_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
}

/// Build the consultant instruction turn for one request.
///
/// On a first run the warm-opening instruction is appended so the model
/// greets the client and produces an initial analysis.
pub fn consultant_prompt(client: &ClientInfo, is_first_run: bool) -> String {
    let mut prompt = render(
        CONSULTANT_SYSTEM,
        &[
            ("name", field_or(&client.name, UNSPECIFIED)),
            ("business_type", field_or(&client.business_type, EMPTY_FIELD)),
            ("strategy_goal", field_or(&client.strategy_goal, EMPTY_FIELD)),
            ("budget_range", field_or(&client.budget_range, EMPTY_FIELD)),
            ("link", field_or(&client.link, EMPTY_FIELD)),
            ("competitors", field_or(&client.competitors, EMPTY_FIELD)),
        ],
    );

    if is_first_run {
        prompt.push('\n');
        prompt.push_str(FIRST_RUN.trim_end());
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!CONSULTANT_SYSTEM.is_empty());
        assert!(!FIRST_RUN.is_empty());
    }

    #[test]
    fn test_consultant_system_has_all_placeholders() {
        for key in [
            "{{name}}",
            "{{business_type}}",
            "{{strategy_goal}}",
            "{{budget_range}}",
            "{{link}}",
            "{{competitors}}",
        ] {
            assert!(CONSULTANT_SYSTEM.contains(key), "missing {}", key);
        }
    }

    #[test]
    fn test_consultant_prompt_fills_client_fields() {
        let client = ClientInfo {
            name: Some("متجر ورد".to_string()),
            business_type: Some("تجارة إلكترونية".to_string()),
            strategy_goal: Some("زيادة المبيعات".to_string()),
            budget_range: Some("5000-10000".to_string()),
            link: Some("https://ward.example".to_string()),
            competitors: Some("متجر زهور".to_string()),
        };

        let prompt = consultant_prompt(&client, false);
        assert!(prompt.contains("متجر ورد"));
        assert!(prompt.contains("تجارة إلكترونية"));
        assert!(prompt.contains("5000-10000"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_consultant_prompt_defaults_missing_fields() {
        let prompt = consultant_prompt(&ClientInfo::default(), false);
        assert!(prompt.contains("المشروع: غير محدد"));
        assert!(prompt.contains("النشاط: -"));
        assert!(prompt.contains("المنافسين: -"));
    }

    #[test]
    fn test_consultant_prompt_treats_empty_string_as_missing() {
        let client = ClientInfo {
            name: Some(String::new()),
            ..ClientInfo::default()
        };
        let prompt = consultant_prompt(&client, false);
        assert!(prompt.contains("المشروع: غير محدد"));
    }

    #[test]
    fn test_first_run_appends_opening_instruction() {
        let without = consultant_prompt(&ClientInfo::default(), false);
        let with = consultant_prompt(&ClientInfo::default(), true);
        assert!(!without.contains("ترحيب حار"));
        assert!(with.contains("ترحيب حار"));
        assert!(with.starts_with(without.trim_end_matches('\n')));
    }
}
