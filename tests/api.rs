use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use newsdesk::models::config::ServerConfig;
use newsdesk::repository::DieselRepository;
use newsdesk::routes;
use serde_json::{Value, json};

mod common;

macro_rules! app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .app_data(web::Data::new(ServerConfig::default()))
                .configure(routes::configure),
        )
        .await
    };
}

fn article_body(title: &str, category: i64, author: i64, tags: &[&str]) -> Value {
    json!({
        "title": title,
        "hero": "https://example.com/hero.jpg",
        "articleType": "TEXT",
        "description": "<p>Body</p>",
        "published": "2024-05-01T12:00:00Z",
        "category": category.to_string(),
        "author": author,
        "tags": tags,
    })
}

#[actix_web::test]
async fn science_filter_fits_on_one_page() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/authors")
        .set_json(json!({"authorName": "Ada"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let author_id = body["data"]["authorId"].as_i64().unwrap();

    for (title, tags) in [
        ("Comets", vec!["Science", "Space"]),
        ("Genes", vec!["Science"]),
        ("Votes", vec!["Politics"]),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/articles/create")
            .set_json(article_body(title, 1, author_id, &tags))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/articles/filter?tag=Science&page=1&pageSize=5&author={author_id}"
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["status"], 1);
    let data = &body["data"];
    assert_eq!(data["articles"].as_array().unwrap().len(), 2);
    assert_eq!(data["page"], 1);
    assert_eq!(data["total"], 2);
    assert_eq!(data["totalPages"], 1);
    assert_eq!(data["tag"], "Science");
    assert_eq!(data["author"]["authorName"], "Ada");
    assert_eq!(data["author"]["authorId"], author_id);
    assert!(data["category"].is_null());
}

#[actix_web::test]
async fn repeated_categories_and_malformed_ids() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    for (title, category) in [("A", 1), ("B", 2), ("C", 3)] {
        let req = test::TestRequest::post()
            .uri("/api/articles/create")
            .set_json(article_body(title, category, 1, &[]))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/articles/filter?categories=1&categories=3&categories=oops")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["categoryIds"], json!([1, 3]));

    let req = test::TestRequest::get()
        .uri("/api/articles/filter?author=not-an-id&categories=zzz")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 3);
    assert!(body["data"]["categoryIds"].is_null());
    assert_eq!(body["data"]["author"]["authorName"], "Anonymous");
    assert!(body["data"]["author"]["authorId"].is_null());
}

#[actix_web::test]
async fn invalid_articles_are_rejected_with_field_names() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let mut audio = article_body("Podcast", 1, 1, &[]);
    audio["articleType"] = json!("AUDIO");
    let req = test::TestRequest::post()
        .uri("/api/articles/create")
        .set_json(audio)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 0);
    assert!(body["message"].as_str().unwrap().contains("mediaUrl"));

    let mut plain = article_body("Plain", 1, 1, &[]);
    plain["description"] = json!("plain text");
    let req = test::TestRequest::post()
        .uri("/api/articles/create")
        .set_json(plain)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("description"));

    let req = test::TestRequest::post()
        .uri("/api/articles/create")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 0);
}

#[actix_web::test]
async fn article_lifecycle() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({"categoryName": "World"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let category_id = body["data"]["categoryId"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/articles/create")
        .set_json(article_body("Draft", category_id, 9, &["News", " News "]))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Article created");
    assert_eq!(body["data"]["tags"], json!(["News"]));
    let article_id = body["data"]["articleId"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/articles/edit/{article_id}"))
        .set_json(json!({"title": "Final"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/articles/{article_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["title"], "Final");
    assert_eq!(body["data"]["category"]["name"], "World");
    assert!(body["data"]["author"].is_null());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/articles/delete/{article_id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    for uri in [
        format!("/api/articles/{article_id}"),
        "/api/articles/not-an-id".to_string(),
    ] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 0);
        assert_eq!(body["message"], "Article not found");
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/api/articles/delete/{article_id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn duplicate_tag_returns_existing() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .set_json(json!({"tagName": "Science"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .set_json(json!({"tagName": "  Science  "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let second: Value = test::read_body_json(resp).await;
    assert_eq!(second["message"], "Tag already exists");
    assert_eq!(second["data"]["tagId"], first["data"]["tagId"]);

    let req = test::TestRequest::get().uri("/api/tags").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .set_json(json!({"tagName": "   "}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn author_update_and_missing_resources() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/authors")
        .set_json(json!({"authorName": "Grace", "description": "Navy"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let author_id = body["data"]["authorId"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/authors/{author_id}"))
        .set_json(json!({"authorName": "Grace Hopper"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["authorName"], "Grace Hopper");
    assert_eq!(body["data"]["description"], "Navy");

    for (method, uri) in [
        (test::TestRequest::delete(), "/api/authors/999"),
        (test::TestRequest::delete(), "/api/categories/abc"),
        (test::TestRequest::delete(), "/api/tags/0"),
        (test::TestRequest::get(), "/api/categories/42"),
    ] {
        let resp = test::call_service(&app, method.uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn store_failure_is_reported_as_500() {
    use diesel::connection::SimpleConnection;

    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let mut conn = test_db.pool().get().expect("should acquire connection");
    conn.batch_execute("DROP TABLE article_tags; DROP TABLE articles;")
        .expect("should drop article tables");

    for uri in ["/api/articles", "/api/articles/filter?tag=Science"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 0);
        assert!(body["message"].as_str().unwrap().contains("articles"));
    }
}
