use serde_json::json;

use super::*;
use crawlview::model::page::PageDto;

/// Tests that the page listing decodes into pages.
///
/// Expected: status 200 and both pages in server order
#[tokio::test]
async fn get_pages_lists_pages() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.pages().create_list_endpoint(vec![
        factory::page(1, "https://a.example", "a"),
        factory::page(2, "https://b.example", "b"),
    ]);
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.get_pages().await;

    assert_eq!(response.status, 200);
    let pages: Vec<PageDto> = serde_json::from_value(response.data)?;
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].url, "https://b.example");
    test.assert_mocks();

    Ok(())
}

/// Tests that a single page is returned verbatim as `data`.
#[tokio::test]
async fn get_page_returns_body_verbatim() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let page = factory::page(42, "https://example.com", "hello");
    test.pages().create_get_endpoint("42", &page);
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.get_page("42").await;

    assert_eq!(response.status, 200);
    assert_eq!(response.data, page);
    let decoded: PageDto = serde_json::from_value(response.data)?;
    assert_eq!(decoded.id, "42");
    test.assert_mocks();

    Ok(())
}

/// Tests normalization of a missing page.
///
/// Verifies the server's error payload is dropped in favour of blank data.
///
/// Expected: status 404, message "Not Found", blank data
#[tokio::test]
async fn missing_page_is_normalized() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.pages().create_get_failure("7", 404);
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.get_page("7").await;

    assert_eq!(response.status, 404);
    assert_eq!(response.message, "Not Found");
    assert_eq!(response.data, json!(""));
    test.assert_mocks();

    Ok(())
}

/// Tests that edit_page sends the new content under `Content`.
#[tokio::test]
async fn edit_page_sends_content() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.pages().create_edit_endpoint("42", "new content");
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.edit_page("42", "new content").await;

    assert_eq!(response.status, 200);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn delete_page_hits_page_path() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.pages().create_delete_endpoint("42");
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.delete_page("42").await;

    assert_eq!(response.status, 200);
    assert_eq!(response.data, json!({ "message": "page deleted" }));
    test.assert_mocks();

    Ok(())
}

/// Tests that search posts the query and returns the hits.
///
/// Expected: status 200 and one hit whose numeric id reads back as a string
#[tokio::test]
async fn search_sends_query() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.pages().create_search_endpoint(
        "rust",
        vec![factory::page(3, "https://www.rust-lang.org", "rust")],
    );
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.search_page("rust").await;

    assert_eq!(response.status, 200);
    let hits: Vec<PageDto> = serde_json::from_value(response.data)?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "3");
    test.assert_mocks();

    Ok(())
}

/// Tests that a URL added through the API shows up in the page listing.
///
/// Verifies `add_url` posts `{"URL": ..}` and that a following `get_pages` includes it.
///
/// Expected: 201 from the add, then a listing containing the URL
#[tokio::test]
async fn added_url_appears_in_listing() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let url = "https://example.com/new";
    let page = factory::page(9, url, "");
    test.pages().create_add_endpoint(url, &page);
    test.pages().create_list_endpoint(vec![page.clone()]);
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let added = session.add_url(url).await;
    assert_eq!(added.status, 201);

    let listed = session.get_pages().await;
    let pages: Vec<PageDto> = serde_json::from_value(listed.data)?;
    assert!(pages.iter().any(|p| p.url == url));
    test.assert_mocks();

    Ok(())
}

/// Tests that plain-text bodies are kept as a JSON string.
#[tokio::test]
async fn plain_text_body_is_kept() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("DELETE", "/page/delete/5")
        .with_status(200)
        .with_body("deleted")
        .create();
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.delete_page("5").await;

    assert_eq!(response.data, json!("deleted"));
    mock.assert();

    Ok(())
}

/// Tests a success response whose body is cut off mid-read.
///
/// Verifies the status the server already sent is kept instead of being reported as a
/// network failure.
///
/// Expected: status 200, message "OK", blank data
#[tokio::test]
async fn truncated_body_keeps_status() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.pages().create_truncated_list_endpoint();
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.get_pages().await;

    assert_eq!(response.status, 200);
    assert_eq!(response.message, "OK");
    assert_eq!(response.data, json!(""));
    test.assert_mocks();

    Ok(())
}
