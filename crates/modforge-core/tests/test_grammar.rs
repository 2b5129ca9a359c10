use modforge_core::slash_command::{Command, CommandKind, Selection, detect};

fn sample_commands() -> Vec<Command> {
    let mut commands = Vec::new();
    for kind in CommandKind::ALL {
        if kind.takes_single_target() {
            commands.push(Command::with_target(kind, "GenerateCodeAction.java").unwrap());
            commands.push(Command::with_target(kind, "Mod Loader Detector").unwrap());
        }
    }
    commands.push(Command::Add {
        feature: "dark mode toggle".to_string(),
        target: "MetricsPanel.java".to_string(),
    });
    commands.push(Command::Add {
        feature: "caching".to_string(),
        target: "Pattern Recognition Service".to_string(),
    });
    commands.push(Command::Implement {
        selection: Selection::All,
    });
    commands.push(Command::Implement {
        selection: Selection::Indices(vec![1, 3, 5]),
    });
    commands.push(Command::Help);
    commands
}

#[test]
fn test_rendered_commands_are_recovered() {
    for command in sample_commands() {
        let text = command.to_slash();
        assert_eq!(detect(&text), vec![command.clone()], "input: {}", text);
    }
}

#[test]
fn test_commands_embedded_in_prose_keep_order() {
    let commands = sample_commands();
    let text = commands
        .iter()
        .map(|c| format!("Could you {} please?", c.to_slash()))
        .collect::<Vec<_>>()
        .join("\n\n");

    assert_eq!(detect(&text), commands);
}

#[test]
fn test_text_without_slash() {
    for text in [
        "",
        "just a regular comment",
        "fix GenerateCodeAction.java and help",
        "\"quoted\" words\nacross lines",
    ] {
        assert!(detect(text).is_empty(), "input: {:?}", text);
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(detect("/help"), vec![Command::Help]);
    assert_eq!(
        detect("/fix GenerateCodeAction.java"),
        vec![Command::Fix {
            target: "GenerateCodeAction.java".to_string()
        }]
    );
    assert_eq!(
        detect(r#"/add "dark mode toggle" to MetricsPanel.java"#),
        vec![Command::Add {
            feature: "dark mode toggle".to_string(),
            target: "MetricsPanel.java".to_string(),
        }]
    );
    assert_eq!(
        detect("/implement 1, 3, 5"),
        vec![Command::Implement {
            selection: Selection::Indices(vec![1, 3, 5])
        }]
    );
    assert_eq!(
        detect("/implement all"),
        vec![Command::Implement {
            selection: Selection::All
        }]
    );
    assert!(detect("/implement banana").is_empty());
}

#[test]
fn test_mixed_comment() {
    let comment = "Thanks for the analysis!\n\n\
        /implement 2, 4\n\
        Also /explain \"ContinuousDevelopmentService\" and x/analyze Foo.java. /HELP";

    assert_eq!(
        detect(comment),
        vec![
            Command::Implement {
                selection: Selection::Indices(vec![2, 4])
            },
            Command::Explain {
                target: "ContinuousDevelopmentService".to_string()
            },
            Command::Analyze {
                target: "Foo.java.".to_string()
            },
            Command::Help,
        ]
    );
}
