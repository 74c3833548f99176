use std::sync::Arc;

use blog_core::domain::{Author, Post, PostSubmission};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, BaseRepository, PostRepository};
use blog_core::{AuthorService, DomainError, PostService};
use uuid::Uuid;

use super::{InMemoryAuthorRepository, InMemoryPostRepository};

struct Store {
    authors: Arc<InMemoryAuthorRepository>,
    posts: Arc<InMemoryPostRepository>,
    service: PostService,
}

fn store() -> Store {
    let authors = Arc::new(InMemoryAuthorRepository::new());
    let posts = Arc::new(InMemoryPostRepository::new(authors.clone()));
    let service = PostService::new(posts.clone(), AuthorService::new(authors.clone()));
    Store {
        authors,
        posts,
        service,
    }
}

fn submission(title: &str, name: &str, surname: &str) -> PostSubmission {
    PostSubmission {
        author_name: name.to_string(),
        author_surname: surname.to_string(),
        title: title.to_string(),
        description: "d".to_string(),
        content: "c".to_string(),
    }
}

#[tokio::test]
async fn test_author_lookup_is_exact() {
    let repo = InMemoryAuthorRepository::new();
    let john = repo
        .create(Author::new("John".to_string(), "Doe".to_string()))
        .await
        .unwrap();

    let found = repo.find_by_name_and_surname("John", "Doe").await.unwrap();
    assert_eq!(found, Some(john));
    assert!(repo.find_by_name_and_surname("JOHN", "Doe").await.unwrap().is_none());
    assert!(repo.find_by_name_and_surname("John", "Do").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_author_is_a_constraint_violation() {
    let repo = InMemoryAuthorRepository::new();
    repo.create(Author::new("John".to_string(), "Doe".to_string()))
        .await
        .unwrap();

    let err = repo
        .create(Author::new("John".to_string(), "Doe".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_post_requires_existing_author() {
    let authors = Arc::new(InMemoryAuthorRepository::new());
    let posts = InMemoryPostRepository::new(authors);

    let orphan = Post::new(
        Uuid::new_v4(),
        "Title".to_string(),
        "d".to_string(),
        "c".to_string(),
    );
    let err = posts.create(orphan).await.unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
    assert_eq!(posts.count().await, 0);
}

#[tokio::test]
async fn test_seeded_author_is_reused() {
    let store = store();
    let seeded = store
        .authors
        .create(Author::new("John".to_string(), "Doe".to_string()))
        .await
        .unwrap();

    let created = store
        .service
        .create_post(submission("Test Post", "John", "Doe"))
        .await
        .unwrap();

    assert_eq!(created.post.author_id, seeded.id);
    assert_eq!(store.authors.count().await, 1);
}

#[tokio::test]
async fn test_new_author_is_created_once() {
    let store = store();

    let first = store
        .service
        .create_post(submission("First", "Jane", "Smith"))
        .await
        .unwrap();
    let second = store
        .service
        .create_post(submission("Second", "Jane", "Smith"))
        .await
        .unwrap();

    assert_eq!(store.authors.count().await, 1);
    assert_eq!(store.posts.count().await, 2);
    assert_eq!(first.post.author_id, second.post.author_id);
    assert_ne!(first.post.id, second.post.id);
}

#[tokio::test]
async fn test_invalid_title_leaves_store_untouched() {
    let store = store();
    let too_long = "x".repeat(101);

    for title in ["", "ab", too_long.as_str()] {
        let err = store
            .service
            .create_post(submission(title, "Jane", "Smith"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    assert_eq!(store.authors.count().await, 0);
    assert_eq!(store.posts.count().await, 0);
}

#[tokio::test]
async fn test_round_trip() {
    let store = store();
    let input = submission("Round Trip", "John", "Doe");

    let created = store.service.create_post(input.clone()).await.unwrap();
    let fetched = store
        .service
        .get_post(created.post.id, false)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.post.title, input.title);
    assert_eq!(fetched.post.description, input.description);
    assert_eq!(fetched.post.content, input.content);
    assert!(fetched.author.is_none());

    let (_, author) = store
        .posts
        .find_with_author(created.post.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(author.map(|a| a.name), Some("John".to_string()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions_share_one_author() {
    let store = store();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = store.service.clone();
            tokio::spawn(async move {
                service
                    .create_post(submission(&format!("Post {i}"), "Ada", "Lovelace"))
                    .await
            })
        })
        .collect();

    let mut author_ids = Vec::new();
    for handle in handles {
        let created = handle.await.unwrap().unwrap();
        author_ids.push(created.post.author_id);
    }

    assert_eq!(store.authors.count().await, 1);
    assert_eq!(store.posts.count().await, 16);
    assert!(author_ids.iter().all(|id| *id == author_ids[0]));
}
