use ingredient_import::{extract_from_url, ExtractError};

#[test]
fn test_extract_from_url_end_to_end() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/recipes/pancakes")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(
            r#"<html><body>
                <h1>Pancakes</h1>
                <ul>
                    <li>2 cups flour</li>
                    <li>1 tablespoon sugar</li>
                    <li>2 eggs</li>
                </ul>
            </body></html>"#,
        )
        .create();

    let url = format!("{}/recipes/pancakes", server.url());
    let recipe = extract_from_url(&url).unwrap();

    assert_eq!(recipe.source, url);
    let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["flour", "sugar", "egg"]);
    mock.assert();
}

#[test]
fn test_connection_failure_surfaces_as_fetch_error() {
    // nothing listens on this port
    let result = extract_from_url("http://127.0.0.1:9/recipes");
    assert!(matches!(result, Err(ExtractError::Fetch(_))));
}

#[test]
fn test_empty_body_is_rejected() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/empty")
        .with_status(200)
        .with_body("")
        .create();

    let result = extract_from_url(&format!("{}/empty", server.url()));
    assert!(matches!(result, Err(ExtractError::EmptyInput)));
}
