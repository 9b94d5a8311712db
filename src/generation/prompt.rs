//! Prompt templates for problem generation.
//!
//! One template per (language, first/repeat) pair. Each template asks for the
//! problem description, three example test cases, three example outputs, the
//! problem name, and example source code. `{difficulty}` and `{topics}` are
//! placeholders for string replacement, not format arguments.

use super::language::PromptLanguage;

pub const ENGLISH_FIRST_TEMPLATE: &str =
    "Give me a {difficulty} level university programming problem{topics}. \
     Provide the problem description, 3 example test cases, 3 example outputs, \
     the name of the problem, and example source code.";

pub const ENGLISH_REPEAT_TEMPLATE: &str =
    "Give me another new {difficulty} level university programming problem{topics}. \
     Include a detailed description, 3 example test cases, 3 example outputs, \
     and example source code.";

pub const THAI_FIRST_TEMPLATE: &str =
    "ขอโจทย์ Programming ระดับมหาลัย ระดับ {difficulty}{topics} \
     อธิบายคำอธิบายของปัญหา ตัวอย่าง Testcase 3 ชุด ผลลัพธ์ตัวอย่าง 3 ชุด \
     ชื่อโจทย์ และตัวอย่างโค้ดโปรแกรม";

pub const THAI_REPEAT_TEMPLATE: &str =
    "ขอโจทย์ใหม่เพิ่มเติม ระดับมหาลัย ระดับ {difficulty}{topics} \
     พร้อมคำอธิบาย ตัวอย่าง Testcase 3 ชุด ผลลัพธ์ตัวอย่าง 3 ชุด \
     และโค้ดโปรแกรมตัวอย่าง";

/// Selects the template for a (language, repeat) pair.
pub const fn template_for(language: PromptLanguage, repeat: bool) -> &'static str {
    match (language, repeat) {
        (PromptLanguage::English, false) => ENGLISH_FIRST_TEMPLATE,
        (PromptLanguage::English, true) => ENGLISH_REPEAT_TEMPLATE,
        (PromptLanguage::Thai, false) => THAI_FIRST_TEMPLATE,
        (PromptLanguage::Thai, true) => THAI_REPEAT_TEMPLATE,
    }
}

/// The optional "related to these topics" clause, in the template's language.
///
/// Empty when no topics are selected so the surrounding sentence stays intact.
fn topics_clause(language: PromptLanguage, topics: &[String]) -> String {
    if topics.is_empty() {
        return String::new();
    }

    let joined = topics.join(", ");
    match language {
        PromptLanguage::English => format!(" related to the following topics: {joined}"),
        PromptLanguage::Thai => format!(" ที่เกี่ยวข้องกับหัวข้อ {joined}"),
    }
}

/// Builds the full prompt text for one problem request.
///
/// The result is a pure function of the arguments; no session state leaks in.
pub fn build_problem_prompt(
    language: PromptLanguage,
    difficulty: &str,
    topics: &[String],
    repeat: bool,
) -> String {
    template_for(language, repeat)
        .replace("{difficulty}", difficulty)
        .replace("{topics}", &topics_clause(language, topics))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CASES: &[(PromptLanguage, bool)] = &[
        (PromptLanguage::English, false),
        (PromptLanguage::English, true),
        (PromptLanguage::Thai, false),
        (PromptLanguage::Thai, true),
    ];

    #[test]
    fn test_templates_have_placeholders() {
        for &(language, repeat) in ALL_CASES {
            let template = template_for(language, repeat);
            assert!(template.contains("{difficulty}"));
            assert!(template.contains("{topics}"));
        }
    }

    #[test]
    fn test_build_substitutes_difficulty_everywhere() {
        for &(language, repeat) in ALL_CASES {
            let prompt = build_problem_prompt(language, "medium", &[], repeat);
            assert!(prompt.contains("medium"));
            assert!(!prompt.contains("{difficulty}"));
            assert!(!prompt.contains("{topics}"));
        }
    }

    #[test]
    fn test_first_and_repeat_templates_differ() {
        let first = build_problem_prompt(PromptLanguage::English, "easy", &[], false);
        let repeat = build_problem_prompt(PromptLanguage::English, "easy", &[], true);
        assert_ne!(first, repeat);
        assert!(repeat.contains("another new"));
    }

    #[test]
    fn test_thai_templates_use_thai_script() {
        let prompt = build_problem_prompt(PromptLanguage::Thai, "hard", &[], false);
        assert!(prompt.contains("ขอโจทย์"));
        assert!(prompt.contains("hard"));
    }

    #[test]
    fn test_topics_joined_with_comma() {
        let topics = vec!["graphs".to_string(), "strings".to_string()];
        let prompt = build_problem_prompt(PromptLanguage::English, "easy", &topics, false);
        assert!(prompt.contains("related to the following topics: graphs, strings"));

        let thai = build_problem_prompt(PromptLanguage::Thai, "easy", &topics, false);
        assert!(thai.contains("ที่เกี่ยวข้องกับหัวข้อ graphs, strings"));
    }

    #[test]
    fn test_no_topics_no_clause() {
        let prompt = build_problem_prompt(PromptLanguage::English, "easy", &[], false);
        assert!(!prompt.contains("topics:"));
        assert!(prompt.contains("problem. Provide"));
    }

    #[test]
    fn test_difficulty_is_free_form() {
        let prompt = build_problem_prompt(
            PromptLanguage::English,
            "slightly harder than easy",
            &[],
            false,
        );
        assert!(prompt.contains("slightly harder than easy"));
    }
}
