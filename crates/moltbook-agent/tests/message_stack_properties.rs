//! Property-based tests for message stack assembly.

use moltbook_agent::{Message, PromptBuilder, Role, SkillBundle};
use moltbook_skills::SkillDocument;
use proptest::prelude::*;

fn role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::System), Just(Role::User), Just(Role::Assistant)]
}

fn history() -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(
        (role(), ".{0,40}").prop_map(|(role, content)| Message::new(role, content)),
        0..16,
    )
}

fn bundle(content: String) -> SkillBundle {
    SkillBundle {
        primary: SkillDocument {
            name: "Moltbook Skill".to_string(),
            source: "https://www.moltbook.com/skill.md".to_string(),
            content,
        },
        heartbeat: None,
        messaging: None,
        metadata: None,
    }
}

proptest! {
    #[test]
    fn system_prompt_starts_with_profile_and_ends_with_skill(
        profile in "[A-Za-z .]{1,60}",
        skill in "[A-Za-z0-9 .]{1,80}",
    ) {
        let prompt = PromptBuilder::build(&profile, &bundle(skill.clone()));

        let expected_prefix = format!("{profile}\n\n");
        let expected_suffix = format!("# Moltbook Skill\n\n{}", skill.trim());
        prop_assert!(prompt.starts_with(&expected_prefix));
        prop_assert!(prompt.ends_with(&expected_suffix));
    }

    #[test]
    fn stack_has_single_leading_system_message(
        history in history(),
        prompt in ".{0,40}",
    ) {
        let messages = PromptBuilder::message_stack("system".to_string(), &prompt, history.clone());

        prop_assert_eq!(messages[0].role, Role::System);
        prop_assert_eq!(messages.iter().filter(|m| m.role == Role::System).count(), 1);
        prop_assert_eq!(messages.last(), Some(&Message::user(prompt)));

        let kept: Vec<&Message> = history.iter().filter(|m| m.role != Role::System).collect();
        let middle: Vec<&Message> = messages[1..messages.len() - 1].iter().collect();
        prop_assert_eq!(middle, kept);
    }
}
