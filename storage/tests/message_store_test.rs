//! Integration tests for [`storage::SqliteMessageStore`] through the [`chat_core::MessageStore`] trait.
//!
//! Covers quiz embedding round-trips (including the comma limitation), feed ordering, answer
//! checking, validation and persistence across reopening a file database.

use chat_core::{AnswerResult, ChatError, Message, MessageStore, Quiz};
use storage::SqliteMessageStore;

async fn memory_store() -> SqliteMessageStore {
    SqliteMessageStore::open("sqlite::memory:")
        .await
        .expect("Failed to open store")
}

fn quiz(options: &[&str], correct: &str) -> Quiz {
    Quiz {
        question: "Which one?".to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct.to_string(),
    }
}

/// **Test: A message sent without a quiz comes back without one.**
#[tokio::test]
async fn test_message_without_quiz_has_no_quiz() {
    let store = memory_store().await;
    store
        .create_message(&Message::new("hello", "alice", "2024-05-01 10:00"))
        .await
        .unwrap();

    let messages = store.list_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0], Message::new("hello", "alice", "2024-05-01 10:00"));
    assert!(messages[0].quiz.is_none());
}

/// **Test: Quiz question, options (order and values) and correct answer round-trip exactly.**
#[tokio::test]
async fn test_quiz_round_trip_without_commas() {
    let store = memory_store().await;
    let message = Message::new("quiz!", "tutor", "t").with_quiz(quiz(&["Lyon", "Paris", "Nice"], "Paris"));

    store.create_message(&message).await.unwrap();

    let messages = store.list_messages().await.unwrap();
    assert_eq!(messages, vec![message]);
}

/// **Test: An option containing a comma is split into extra options on read.**
///
/// This is the documented limitation of the comma-joined `quiz_options` column.
#[tokio::test]
async fn test_quiz_option_with_comma_is_not_faithful() {
    let store = memory_store().await;
    let message = Message::new("numbers", "tutor", "t").with_quiz(quiz(&["1,000", "2000"], "2000"));

    store.create_message(&message).await.unwrap();

    let read_back = store.list_messages().await.unwrap().remove(0).quiz.unwrap();
    assert_eq!(read_back.options, vec!["1", "000", "2000"]);
    assert_ne!(Some(read_back), message.quiz);
}

/// **Test: A quiz with no options reads back with no options.**
#[tokio::test]
async fn test_quiz_with_empty_options() {
    let store = memory_store().await;
    let message = Message::new("open question", "tutor", "t").with_quiz(quiz(&[], "anything"));

    store.create_message(&message).await.unwrap();

    let read_back = store.list_messages().await.unwrap().remove(0);
    assert_eq!(read_back, message);
}

/// **Test: The feed is newest first.**
///
/// **Setup:** Insert A then B. **Expected:** `[B, A]`.
#[tokio::test]
async fn test_feed_is_descending_by_insertion() {
    let store = memory_store().await;
    store.create_message(&Message::new("A", "alice", "t1")).await.unwrap();
    store.create_message(&Message::new("B", "bob", "t2")).await.unwrap();

    let contents: Vec<String> = store
        .list_messages()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.content)
        .collect();
    assert_eq!(contents, vec!["B", "A"]);
}

/// **Test: N inserts yield exactly N entries, newest first.**
#[tokio::test]
async fn test_feed_returns_all_messages() {
    let store = memory_store().await;
    for i in 0..20 {
        store
            .create_message(&Message::new(format!("m{}", i), "s", "t"))
            .await
            .unwrap();
    }

    let messages = store.list_messages().await.unwrap();
    assert_eq!(messages.len(), 20);
    assert_eq!(messages.first().unwrap().content, "m19");
    assert_eq!(messages.last().unwrap().content, "m0");
}

/// **Test: Listing twice without writes returns identical sequences; empty store lists nothing.**
#[tokio::test]
async fn test_list_is_idempotent() {
    let store = memory_store().await;
    assert!(store.list_messages().await.unwrap().is_empty());

    store.create_message(&Message::new("x", "s", "t")).await.unwrap();
    store
        .create_message(&Message::new("y", "s", "t").with_quiz(quiz(&["a", "b"], "a")))
        .await
        .unwrap();

    let first = store.list_messages().await.unwrap();
    let second = store.list_messages().await.unwrap();
    assert_eq!(first, second);
}

/// **Test: Answers are compared exactly and unknown ids are NotFound.**
///
/// **Setup:** Quiz `{question: "2+2?", answer: "4"}` gets id 1; quiz with answer "Paris".
#[tokio::test]
async fn test_answer_quiz() {
    let store = memory_store().await;
    let arithmetic = store.create_quiz("2+2?", "4").await.unwrap();
    assert_eq!(arithmetic.id, 1);
    let capital = store.create_quiz("Capital of France?", "Paris").await.unwrap();

    assert_eq!(store.answer_quiz(1, "4").await.unwrap(), AnswerResult::Correct);
    assert_eq!(store.answer_quiz(1, "five").await.unwrap(), AnswerResult::Incorrect);
    assert_eq!(
        store.answer_quiz(capital.id, "Paris").await.unwrap(),
        AnswerResult::Correct
    );
    assert_eq!(
        store.answer_quiz(capital.id, "paris").await.unwrap(),
        AnswerResult::Incorrect
    );

    let missing = store.answer_quiz(999, "4").await;
    assert!(matches!(missing, Err(ChatError::NotFound(_))));
}

/// **Test: Blank required fields are rejected and nothing is written.**
#[tokio::test]
async fn test_validation_rejects_and_writes_nothing() {
    let store = memory_store().await;

    let blank_content = store.create_message(&Message::new("", "alice", "t")).await;
    assert!(matches!(blank_content, Err(ChatError::Validation(_))));

    let mut bad_quiz = quiz(&["a"], "a");
    bad_quiz.question = "  ".to_string();
    let blank_question = store
        .create_message(&Message::new("c", "alice", "t").with_quiz(bad_quiz))
        .await;
    assert!(matches!(blank_question, Err(ChatError::Validation(_))));

    assert!(matches!(
        store.create_quiz("", "4").await,
        Err(ChatError::Validation(_))
    ));

    assert!(store.list_messages().await.unwrap().is_empty());
}

/// **Test: System messages are stored like normal messages (flag not persisted).**
#[tokio::test]
async fn test_system_message_is_stored_as_plain_message() {
    let store = memory_store().await;
    let message = Message::new("Server restarting", "system", "t");

    store.create_system_message(&message).await.unwrap();

    assert_eq!(store.list_messages().await.unwrap(), vec![message]);
}

/// **Test: Data survives reopening a file database; schema creation is idempotent.**
#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("chat.db").display());

    {
        let store = SqliteMessageStore::open(&url).await.unwrap();
        store.create_message(&Message::new("persisted", "alice", "t")).await.unwrap();
        store.create_quiz("2+2?", "4").await.unwrap();
    }

    let reopened = SqliteMessageStore::open(&url).await.unwrap();
    let messages = reopened.list_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "persisted");
    assert_eq!(reopened.answer_quiz(1, "4").await.unwrap(), AnswerResult::Correct);
}

/// **Test: Concurrent creates and lists never observe partial rows and lose no inserts.**
///
/// **Setup:** File database; 100 writers and 100 readers spawned interleaved on a multi-threaded runtime.
/// **Action:** Each writer inserts one message with a quiz; each reader lists the feed.
/// **Expected:** No task errors; every listed message is complete (quiz intact); final count is exactly 100.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_and_lists() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("chat.db").display());
    let store = std::sync::Arc::new(SqliteMessageStore::open(&url).await.unwrap());

    let mut handles = Vec::new();
    for i in 0..100 {
        let writer = store.clone();
        handles.push(tokio::spawn(async move {
            let message = Message::new(format!("m{}", i), "writer", "t")
                .with_quiz(quiz(&["a", "b", "c"], "b"));
            writer.create_message(&message).await.map(|_| 0usize)
        }));

        let reader = store.clone();
        handles.push(tokio::spawn(async move {
            let messages = reader.list_messages().await?;
            for message in &messages {
                assert!(message.content.starts_with('m'));
                assert_eq!(message.quiz, Some(quiz(&["a", "b", "c"], "b")));
            }
            Ok::<usize, ChatError>(messages.len())
        }));
    }

    let mut errors = 0;
    for handle in handles {
        match handle.await.expect("task panicked") {
            Ok(count) => assert!(count <= 100),
            Err(_) => errors += 1,
        }
    }

    assert_eq!(errors, 0);
    assert_eq!(store.list_messages().await.unwrap().len(), 100);
}
