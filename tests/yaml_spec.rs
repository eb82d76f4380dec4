use speculate2::speculate;
use storyfile::engine::Session;
use storyfile::models::*;
use storyfile::yaml::{self, YamlError};

const SAMPLE: &str = r#"
epics:
  - title: Checkout
    stories:
      - title: Pay by card
        as: shopper
        i want: to pay with my card
        so that: I do not need a bank transfer
        status: Done
        points: 5
        sprint: 2024-03
        definition of done:
          - 3DS flow covered
        sub tasks:
          - title: Tokenize card
            status: WIP
tasks:
  - title: Set up CI
    status: WIP
"#;

speculate! {
    describe "parse" {
        it "normalizes an empty document to empty collections" {
            let file = yaml::parse("").expect("parse failed");
            assert!(file.epics.is_empty());
            assert!(file.tasks.is_empty());
        }

        it "normalizes a null document to empty collections" {
            let file = yaml::parse("---\n").expect("parse failed");
            assert!(file.epics.is_empty());
            assert!(file.tasks.is_empty());
        }

        it "defaults a missing collection to an empty sequence" {
            let file = yaml::parse("epics:\n  - title: Checkout\n").expect("parse failed");
            assert_eq!(file.epics.len(), 1);
            assert!(file.tasks.is_empty());
        }

        it "treats a null collection as empty" {
            let file = yaml::parse("epics:\n  - title: Checkout\n    stories:\ntasks:\n")
                .expect("parse failed");
            assert!(file.epics[0].stories.is_empty());
            assert!(file.tasks.is_empty());
        }

        it "reads the multi-word keys verbatim" {
            let file = yaml::parse(SAMPLE).expect("parse failed");
            let story = &file.epics[0].stories[0];
            assert_eq!(story.as_a.as_deref(), Some("shopper"));
            assert_eq!(story.i_want.as_deref(), Some("to pay with my card"));
            assert_eq!(story.so_that.as_deref(), Some("I do not need a bank transfer"));
            assert_eq!(story.definition_of_done, vec!["3DS flow covered".to_string()]);
            assert_eq!(story.sub_tasks.len(), 1);
        }

        it "coerces a missing status to ToDo" {
            let file = yaml::parse("tasks:\n  - title: Set up CI\n").expect("parse failed");
            assert_eq!(file.tasks[0].status, Status::Todo);
        }

        it "accepts exactly the three status wire values" {
            let file = yaml::parse(
                "tasks:\n  - title: A\n    status: ToDo\n  - title: B\n    status: WIP\n  - title: C\n    status: Done\n"
            ).expect("parse failed");
            assert_eq!(file.tasks[0].status, Status::Todo);
            assert_eq!(file.tasks[1].status, Status::Wip);
            assert_eq!(file.tasks[2].status, Status::Done);
        }

        it "rejects unknown status spellings" {
            let err = yaml::parse("tasks:\n  - title: A\n    status: done\n").unwrap_err();
            assert!(matches!(err, YamlError::Parse(_)));
        }

        it "surfaces malformed YAML as a parse error" {
            let err = yaml::parse("epics: [unclosed\n").unwrap_err();
            assert!(matches!(err, YamlError::Parse(_)));
        }
    }

    describe "emit" {
        it "round-trips a loaded document" {
            let first = Session::load(SAMPLE).expect("load failed");
            let text = first.save().expect("save failed");
            let second = Session::load(&text).expect("reload failed");
            // Ids are assigned in document order, so both loads agree on them
            // and whole-forest equality holds.
            assert_eq!(second.file(), first.file());
        }

        it "writes the multi-word keys verbatim" {
            let session = Session::load(SAMPLE).expect("load failed");
            let text = session.save().expect("save failed");
            assert!(text.contains("i want:"));
            assert!(text.contains("so that:"));
            assert!(text.contains("definition of done:"));
            assert!(text.contains("sub tasks:"));
        }

        it "writes the exact status wire values" {
            let session = Session::load(SAMPLE).expect("load failed");
            let text = session.save().expect("save failed");
            assert!(text.contains("status: Done"));
            assert!(text.contains("status: WIP"));
        }

        it "never writes node ids" {
            let session = Session::load(SAMPLE).expect("load failed");
            let text = session.save().expect("save failed");
            assert!(!text.contains("id:"));
        }

        it "omits empty collections" {
            let session = Session::load("epics:\n  - title: Checkout\n").expect("load failed");
            let text = session.save().expect("save failed");
            assert!(!text.contains("stories:"));
            assert!(!text.contains("tasks:"));
        }

        it "survives a mutation round-trip" {
            let mut session = Session::load(SAMPLE).expect("load failed");
            session.insert(None, NewItem::Task(NewTask {
                title: "Write onboarding docs".to_string(),
                ..Default::default()
            }));
            let text = session.save().expect("save failed");
            let reloaded = Session::load(&text).expect("reload failed");
            assert_eq!(reloaded.file().tasks.len(), 2);
            assert_eq!(reloaded.file().tasks[1].title, "Write onboarding docs");
            assert_eq!(reloaded.file().tasks[1].status, Status::Todo);
        }
    }

    describe "identifier assignment" {
        it "assigns ids in depth-first document order" {
            let session = Session::load(SAMPLE).expect("load failed");
            let file = session.file();
            assert_eq!(file.epics[0].id, Some(NodeId::from(0)));
            assert_eq!(file.epics[0].stories[0].id, Some(NodeId::from(1)));
            assert_eq!(file.epics[0].stories[0].sub_tasks[0].id, Some(NodeId::from(2)));
            assert_eq!(file.tasks[0].id, Some(NodeId::from(3)));
        }

        it "assigns epics and their subtree before root tasks" {
            let session = Session::load(
                "epics:\n  - title: A\n  - title: B\ntasks:\n  - title: T\n"
            ).expect("load failed");
            let file = session.file();
            assert_eq!(file.epics[0].id, Some(NodeId::from(0)));
            assert_eq!(file.epics[1].id, Some(NodeId::from(1)));
            assert_eq!(file.tasks[0].id, Some(NodeId::from(2)));
        }

        it "restarts the counter on every load" {
            let a = Session::load(SAMPLE).expect("load failed");
            let b = Session::load(SAMPLE).expect("load failed");
            assert_eq!(a.file(), b.file());
        }
    }
}
