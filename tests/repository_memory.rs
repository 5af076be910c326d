use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinSet;

use shorturl::application::services::{RedirectService, ShortenService};
use shorturl::domain::repositories::UrlRecordRepository;
use shorturl::infrastructure::persistence::MemoryUrlRecordRepository;
use shorturl::utils::short_url::{ShortUrlFormatter, extract_short_id};

fn formatter() -> ShortUrlFormatter {
    ShortUrlFormatter::new("http://localhost:8080", "my")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_redirects_are_all_counted() {
    let repository = Arc::new(MemoryUrlRecordRepository::new());
    let record = repository.create("https://example.com").await.unwrap();
    let service = Arc::new(RedirectService::new(repository.clone()));

    let mut tasks = JoinSet::new();
    for _ in 0..200 {
        let service = service.clone();
        let id = record.id.to_string();
        tasks.spawn(async move { service.resolve(&id).await });
    }

    while let Some(result) = tasks.join_next().await {
        assert_eq!(result.unwrap().unwrap(), "https://example.com");
    }

    let stored = repository.find_by_id(record.id).await.unwrap().unwrap();
    assert_eq!(stored.count, 200);
    assert!(stored.last_access >= record.last_access);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shorten_yields_one_record() {
    let repository = Arc::new(MemoryUrlRecordRepository::new());
    let service = Arc::new(ShortenService::new(repository.clone(), formatter()));

    let mut tasks = JoinSet::new();
    for _ in 0..50 {
        let service = service.clone();
        tasks.spawn(async move { service.shorten("https://race.example").await });
    }

    let mut short_urls = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        short_urls.insert(result.unwrap().unwrap().short_url);
    }

    assert_eq!(short_urls.len(), 1);
    assert_eq!(repository.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_shorten_then_resolve() {
    let repository = Arc::new(MemoryUrlRecordRepository::new());
    let shorten = ShortenService::new(repository.clone(), formatter());
    let redirect = RedirectService::new(repository.clone());

    let shortened = shorten.shorten("https://example.com/a?b=c").await.unwrap();
    let id = extract_short_id(&shortened.short_url);

    assert_eq!(shortened.short_url, format!("http://localhost:8080/my/{}", shortened.id));
    assert_eq!(redirect.resolve(id).await.unwrap(), "https://example.com/a?b=c");
}

#[tokio::test]
async fn test_list_all_returns_every_record_once() {
    let repository = MemoryUrlRecordRepository::new();
    for i in 0..5 {
        repository
            .create(&format!("https://{i}.example"))
            .await
            .unwrap();
    }

    let records = repository.list_all().await.unwrap();
    let ids: HashSet<i64> = records.iter().map(|record| record.id).collect();

    assert_eq!(records.len(), 5);
    assert_eq!(ids, HashSet::from([1, 2, 3, 4, 5]));
}
