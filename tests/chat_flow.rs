mod common;

use common::{test_data, TestContext};
use coursehub::types::error::AppError;
use entity::{chat_message, custom_learn_courses, file};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use std::time::Duration;

async fn lesson_fixture(ctx: &TestContext) -> (i32, i32) {
    let author = ctx.create_test_user("author@example.com", "pw").await;
    let category = ctx.db.create_category("Cat".into(), None, None).await.unwrap();
    let course = ctx.db.create_course("Course".into(), category.id, author).await.unwrap();
    let lesson = ctx.db.create_lesson(test_data::lesson(course.id, "Intro")).await.unwrap();
    (author, lesson.id)
}

#[tokio::test]
async fn test_one_chat_per_lesson() {
    let ctx = TestContext::new().await;
    let (_, lesson_id) = lesson_fixture(&ctx).await;

    assert!(ctx.db.get_lesson_chat(lesson_id).await.unwrap().is_none());

    let chat = ctx.db.open_lesson_chat(lesson_id, "Intro Q&A".into()).await.unwrap();
    assert_eq!(ctx.db.get_lesson_chat(lesson_id).await.unwrap().map(|c| c.id), Some(chat.id));

    let err = ctx.db.open_lesson_chat(lesson_id, "Second".into()).await.unwrap_err();
    assert!(matches!(err, AppError::AlreadyExists));
}

#[tokio::test]
async fn test_messages_are_stamped_per_row_and_ordered() {
    let ctx = TestContext::new().await;
    let (author, lesson_id) = lesson_fixture(&ctx).await;
    let reader = ctx.create_test_user("reader@example.com", "pw").await;
    let chat = ctx.db.open_lesson_chat(lesson_id, "Intro Q&A".into()).await.unwrap();

    let first = ctx.db.post_chat_message(chat.id, author, "Welcome".into()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1100)).await;
    let second = ctx.db.post_chat_message(chat.id, reader, "Thanks!".into()).await.unwrap();

    assert!(second.datetime > first.datetime);

    let messages = ctx.db.list_chat_messages(chat.id).await.unwrap();
    let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["Welcome", "Thanks!"]);
    assert_eq!(messages[0].user_id, author);
    assert_eq!(messages[1].user_id, reader);
}

#[tokio::test]
async fn test_message_requires_existing_chat_and_author() {
    let ctx = TestContext::new().await;
    let (author, lesson_id) = lesson_fixture(&ctx).await;
    let chat = ctx.db.open_lesson_chat(lesson_id, "Q&A".into()).await.unwrap();

    let err = ctx.db.post_chat_message(9999, author, "lost".into()).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    let err = ctx.db.post_chat_message(chat.id, 9999, "ghost".into()).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_lesson_delete_removes_chat_and_messages() {
    let ctx = TestContext::new().await;
    let (author, lesson_id) = lesson_fixture(&ctx).await;
    let chat = ctx.db.open_lesson_chat(lesson_id, "Q&A".into()).await.unwrap();
    ctx.db.post_chat_message(chat.id, author, "hello".into()).await.unwrap();
    let slides = ctx.db.add_lesson_file(lesson_id, "slides.pdf".into(), "https://cdn.example.com/slides.pdf".into()).await.unwrap();

    ctx.db.delete_lesson(lesson_id).await.unwrap();

    assert!(matches!(ctx.db.get_chat(chat.id).await, Err(AppError::NotFound)));
    assert!(matches!(ctx.db.list_chat_messages(chat.id).await, Err(AppError::NotFound)));
    assert!(matches!(ctx.db.list_lesson_files(lesson_id).await, Err(AppError::NotFound)));

    let conn = ctx.db.connection();
    assert!(file::Entity::find_by_id(slides.id).one(conn).await.unwrap().is_none());
    assert_eq!(chat_message::Entity::find().count(conn).await.unwrap(), 0);
}

#[tokio::test]
async fn test_deleted_user_takes_enrollments_and_messages_along() {
    let ctx = TestContext::new().await;
    let (author, lesson_id) = lesson_fixture(&ctx).await;
    let course_id = ctx.db.get_lesson(lesson_id).await.unwrap().course_id;
    let reader = ctx.create_test_user("reader@example.com", "pw").await;
    let chat = ctx.db.open_lesson_chat(lesson_id, "Q&A".into()).await.unwrap();

    ctx.db.enroll_user(author, course_id).await.unwrap();
    ctx.db.enroll_user(reader, course_id).await.unwrap();
    ctx.db.post_chat_message(chat.id, reader, "first".into()).await.unwrap();
    ctx.db.post_chat_message(chat.id, author, "reply".into()).await.unwrap();
    ctx.db.post_chat_message(chat.id, reader, "second".into()).await.unwrap();

    ctx.db.delete_user(reader).await.unwrap();

    let students: Vec<i32> = ctx.db.list_course_students(course_id).await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(students, vec![author]);

    let messages = ctx.db.list_chat_messages(chat.id).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].user_id, author);

    let conn = ctx.db.connection();
    let leftover_enrollments = custom_learn_courses::Entity::find()
        .filter(custom_learn_courses::Column::UserId.eq(reader))
        .count(conn)
        .await
        .unwrap();
    assert_eq!(leftover_enrollments, 0);
    let leftover_messages = chat_message::Entity::find()
        .filter(chat_message::Column::UserId.eq(reader))
        .count(conn)
        .await
        .unwrap();
    assert_eq!(leftover_messages, 0);
}
