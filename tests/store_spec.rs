use context_keeper::models::DocKind;
use context_keeper::store::{DocumentStore, FsStore, MemoryStore, SnapshotStore};
use context_keeper::ContextError;
use speculate2::speculate;

speculate! {
    describe "fs_store" {
        before {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let store = FsStore::open(dir.path()).expect("Failed to open store");
        }

        describe "open" {
            it "creates the context and checkpoints directories" {
                assert!(dir.path().join(".context").is_dir());
                assert!(dir.path().join(".context/checkpoints").is_dir());
            }

            it "is idempotent over an existing directory" {
                let again = FsStore::open(dir.path());
                assert!(again.is_ok());
            }
        }

        describe "documents" {
            it "returns None for a document that was never written" {
                let body = store.read_document(DocKind::Handoff).expect("Read failed");
                assert!(body.is_none());
            }

            it "overwrites a document in place" {
                store.write_document(DocKind::CurrentState, "first").expect("Write failed");
                store.write_document(DocKind::CurrentState, "second").expect("Write failed");

                let body = store.read_document(DocKind::CurrentState).expect("Read failed");
                assert_eq!(body.as_deref(), Some("second"));
            }

            it "resolves documents by their public name" {
                store.write_document(DocKind::CurrentState, "body").expect("Write failed");

                let kind = DocKind::from_str("current_state").expect("Unknown document name");
                let body = store.read_document(kind).expect("Read failed");
                assert_eq!(body.as_deref(), Some("body"));
            }

            it "stores the overview under the conventional README name" {
                store.write_document(DocKind::Overview, "overview body").expect("Write failed");
                let raw = std::fs::read_to_string(dir.path().join(".context/README.md"))
                    .expect("README.md missing");
                assert_eq!(raw, "overview body");
            }
        }

        describe "decisions" {
            it "starts empty" {
                let lines = store.read_decisions().expect("Read failed");
                assert!(lines.is_empty());
            }

            it "appends lines in call order" {
                store.append_decision("[2026-08-23 10:00:00] [ARCH] first").expect("Append failed");
                store.append_decision("[2026-08-23 10:00:01] [TOOLING] second").expect("Append failed");

                let lines = store.read_decisions().expect("Read failed");
                assert_eq!(lines.len(), 2);
                assert!(lines[0].contains("first"));
                assert!(lines[1].contains("second"));
            }
        }

        describe "snapshots" {
            it "lists identifiers most recent first" {
                store.create_snapshot("20260823_100000_one", "one").expect("Create failed");
                store.create_snapshot("20260823_100005_two", "two").expect("Create failed");
                store.create_snapshot("20260824_090000_three", "three").expect("Create failed");

                let ids = store.list_snapshots(None).expect("List failed");
                assert_eq!(ids, vec![
                    "20260824_090000_three",
                    "20260823_100005_two",
                    "20260823_100000_one",
                ]);
            }

            it "bounds the listing by limit" {
                store.create_snapshot("20260823_100000_one", "one").expect("Create failed");
                store.create_snapshot("20260823_100005_two", "two").expect("Create failed");

                let ids = store.list_snapshots(Some(1)).expect("List failed");
                assert_eq!(ids, vec!["20260823_100005_two"]);
            }

            it "reads back a stored payload" {
                store.create_snapshot("20260823_100000_one", "payload").expect("Create failed");
                let payload = store.read_snapshot("20260823_100000_one").expect("Read failed");
                assert_eq!(payload, "payload");
            }

            it "fails with NotFound for an unknown identifier" {
                let err = store.read_snapshot("20260823_100000_missing").unwrap_err();
                assert!(matches!(err, ContextError::NotFound(id) if id.contains("missing")));
            }

            it "refuses to overwrite an existing identifier" {
                store.create_snapshot("20260823_100000_one", "first").expect("Create failed");
                let err = store.create_snapshot("20260823_100000_one", "second").unwrap_err();
                assert!(matches!(err, ContextError::Io { .. }));

                // The original payload is untouched.
                let payload = store.read_snapshot("20260823_100000_one").expect("Read failed");
                assert_eq!(payload, "first");
            }
        }
    }

    describe "memory_store" {
        before {
            let store = MemoryStore::new();
        }

        it "mirrors document overwrite semantics" {
            store.write_document(DocKind::Summary, "first").expect("Write failed");
            store.write_document(DocKind::Summary, "second").expect("Write failed");
            let body = store.read_document(DocKind::Summary).expect("Read failed");
            assert_eq!(body.as_deref(), Some("second"));
        }

        it "mirrors snapshot collision semantics" {
            store.create_snapshot("20260823_100000_one", "first").expect("Create failed");
            let err = store.create_snapshot("20260823_100000_one", "second").unwrap_err();
            assert!(matches!(err, ContextError::Io { .. }));
        }

        it "mirrors snapshot ordering" {
            store.create_snapshot("20260823_100000_one", "one").expect("Create failed");
            store.create_snapshot("20260823_100005_two", "two").expect("Create failed");

            let ids = store.list_snapshots(None).expect("List failed");
            assert_eq!(ids, vec!["20260823_100005_two", "20260823_100000_one"]);
        }

        it "mirrors NotFound on unknown snapshot reads" {
            let err = store.read_snapshot("nope").unwrap_err();
            assert!(matches!(err, ContextError::NotFound(_)));
        }
    }
}
