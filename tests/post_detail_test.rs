//! The post detail screen: detail cell, comment thread, and their actions.

mod common;

use std::sync::Arc;

use burrow::controllers::PostController;
use remote::RemoteError;

use common::{sample_comment, sample_post, MockRemote};

async fn loaded_post(remote: &Arc<MockRemote>) -> PostController {
    remote.script_post(Ok(sample_post("p1", "hello")));
    remote.script_comments(Ok(vec![
        sample_comment("c1", "first"),
        sample_comment("c2", "second"),
    ]));
    let post = PostController::new(Arc::clone(remote) as Arc<dyn remote::RemoteApi>, "p1");
    post.load(false).await;
    post.load_comments(false).await;
    assert!(post.detail().current().is_success());
    assert!(post.comments().current().is_success());
    post
}

#[tokio::test]
async fn like_patches_the_detail_without_loading() {
    let remote = Arc::new(MockRemote::new());
    let post = loaded_post(&remote).await;

    let mut liked = sample_post("p1", "hello");
    liked.liked = true;
    liked.like_count = 5;
    remote.script_like(Ok(liked));

    post.like().await;

    let state = post.detail().current();
    let detail = state.data().unwrap();
    assert!(detail.liked);
    assert_eq!(detail.like_count, 5);
    assert_eq!(post.action_errors().current(), None);
}

#[tokio::test]
async fn added_comment_is_appended_to_the_thread() {
    let remote = Arc::new(MockRemote::new());
    let post = loaded_post(&remote).await;

    remote.script_add_comment(Ok(sample_comment("c3", "third")));
    post.add_comment("third").await;

    let state = post.comments().current();
    let comments = state.data().unwrap();
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[2].id, "c3");
}

#[tokio::test]
async fn liked_comment_is_replaced_in_place() {
    let remote = Arc::new(MockRemote::new());
    let post = loaded_post(&remote).await;

    let mut liked = sample_comment("c2", "second");
    liked.liked = true;
    liked.like_count = 1;
    remote.script_like_comment(Ok(liked));

    post.like_comment("c2").await;

    let state = post.comments().current();
    let comments = state.data().unwrap();
    assert_eq!(comments.len(), 2);
    assert!(!comments[0].liked);
    assert!(comments[1].liked);
    assert_eq!(comments[1].like_count, 1);
}

#[tokio::test]
async fn failed_comment_action_leaves_the_thread_and_raises() {
    let remote = Arc::new(MockRemote::new());
    let post = loaded_post(&remote).await;
    let before = post.comments().current();

    remote.script_add_comment(Err(RemoteError::server("comment rejected")));
    post.add_comment("spam").await;

    assert_eq!(post.comments().current(), before);
    assert_eq!(
        post.action_errors().current().unwrap().message,
        "comment rejected"
    );
}

#[tokio::test]
async fn detail_and_comments_cells_fail_independently() {
    let remote = Arc::new(MockRemote::new());
    remote.script_post(Ok(sample_post("p1", "hello")));
    remote.script_comments(Err(RemoteError::server("thread unavailable")));

    let post = PostController::new(Arc::clone(&remote) as Arc<dyn remote::RemoteApi>, "p1");
    post.load(false).await;
    post.load_comments(false).await;

    assert!(post.detail().current().is_success());
    let state = post.comments().current();
    assert_eq!(state.error().unwrap().message, "thread unavailable");
}
