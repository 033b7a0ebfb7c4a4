mod cli;

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use burrow::controllers::{
    AuthController, ChatController, CommunityController, FeedController, ProfileController,
};
use burrow::controllers::profile::ProfileTarget;
use burrow::state::RequestState;
use remote::types::FeedQuery;
use remote::{CredentialStore, HttpApi, RemoteApi};

use crate::cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let credentials = Arc::new(CredentialStore::in_memory());
    let remote: Arc<dyn RemoteApi> =
        Arc::new(HttpApi::new(args.base_url.clone(), Arc::clone(&credentials)));

    let auth = AuthController::new(Arc::clone(&remote), credentials);
    auth.log_in(&args.email, &args.password).await;
    if let RequestState::Failure(err) = auth.session().current() {
        bail!("login failed ({}): {}", err.kind, err.message);
    }

    match args.command {
        Command::Feed { community } => {
            let query = match community {
                Some(id) => FeedQuery::community(id),
                None => FeedQuery::home(),
            };
            let feed = FeedController::new(remote, query);
            feed.load(false).await;
            match feed.posts().current() {
                RequestState::Success(posts) => {
                    for post in posts {
                        println!(
                            "[{}] @{}: {} ({} likes, {} comments)",
                            post.created_at.format("%Y-%m-%d %H:%M"),
                            post.author.username,
                            post.body,
                            post.like_count,
                            post.comment_count,
                        );
                    }
                }
                RequestState::Failure(err) => bail!("feed failed ({}): {}", err.kind, err.message),
                _ => {}
            }
        }
        Command::Me => {
            let profile = ProfileController::new(remote, ProfileTarget::Me);
            profile.load(false).await;
            match profile.profile().current() {
                RequestState::Success(user) => {
                    println!("@{} <{}>", user.username, user.email.unwrap_or_default());
                    println!(
                        "{} followers, {} following",
                        user.follower_count, user.following_count
                    );
                    if let Some(bio) = user.bio {
                        println!("{bio}");
                    }
                }
                RequestState::Failure(err) => {
                    bail!("profile failed ({}): {}", err.kind, err.message)
                }
                _ => {}
            }
        }
        Command::Communities => {
            let communities = CommunityController::new(remote);
            communities.load(false).await;
            match communities.communities().current() {
                RequestState::Success(list) => {
                    for community in list {
                        let marker = if community.joined { "*" } else { " " };
                        println!(
                            "{marker} {} ({} members)",
                            community.name, community.member_count
                        );
                    }
                }
                RequestState::Failure(err) => {
                    bail!("communities failed ({}): {}", err.kind, err.message)
                }
                _ => {}
            }
        }
        Command::Conversations => {
            let chat = ChatController::new(remote);
            chat.load(false).await;
            match chat.conversations().current() {
                RequestState::Success(list) => {
                    for conversation in list {
                        let preview = conversation
                            .last_message
                            .map(|m| m.body)
                            .unwrap_or_default();
                        println!(
                            "@{} ({} unread): {preview}",
                            conversation.peer.username, conversation.unread_count
                        );
                    }
                }
                RequestState::Failure(err) => bail!("chat failed ({}): {}", err.kind, err.message),
                _ => {}
            }
        }
    }

    Ok(())
}
