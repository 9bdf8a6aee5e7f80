use crate::Client;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[tokio::test]
async fn test_unparseable_base_url_is_reported() {
    let client = Client::new("not a url");

    let err = client.get_project(1).await.unwrap_err();

    assert!(err.to_string().contains("Invalid server URL"));
}
