use super::*;
use crate::output::yuml::{Association, YumlClass};
use mockito::{Matcher, Server};

fn diagram() -> YumlDiagram {
    let mut diagram = YumlDiagram::new();
    diagram.associate(Association {
        parent: YumlClass::new("App").with_note("C#"),
        child: YumlClass::new("Core"),
    });
    diagram
}

#[test]
fn test_form_body_is_percent_encoded() {
    assert_eq!(
        form_body(&diagram()),
        "dsl_text=%5BApp%7CC%23%3B%5D%2C%5BCore%5D%2C%5BApp%5D-%3E%5BCore%5D"
    );
}

#[test]
fn test_diagram_url_joins_statements_with_commas() {
    let url = diagram_url("https://yuml.me/", &diagram());
    assert_eq!(
        url,
        "https://yuml.me/diagram/nofunky/class/%5BApp%7CC%23%3B%5D,%5BCore%5D,%5BApp%5D-%3E%5BCore%5D"
    );
}

#[test]
fn test_render_posts_then_fetches_image() {
    let mut server = Server::new();
    let post = server
        .mock("POST", CLASS_DIAGRAM_PATH)
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::Exact(form_body(&diagram())))
        .with_status(200)
        .with_body("abc123.svg\n")
        .create();
    let get = server
        .mock("GET", "/abc123.svg")
        .with_status(200)
        .with_body("<svg/>")
        .create();

    let client = YumlClient::new(&server.url()).unwrap();
    let bytes = client.render_svg(&diagram()).unwrap();

    assert_eq!(bytes, b"<svg/>");
    post.assert();
    get.assert();
}

#[test]
fn test_server_error_is_invalid_response() {
    let mut server = Server::new();
    let _post = server
        .mock("POST", CLASS_DIAGRAM_PATH)
        .with_status(500)
        .create();

    let client = YumlClient::new(&server.url()).unwrap();
    let err = client.render_svg(&diagram()).unwrap_err();
    assert!(matches!(err, OutputError::InvalidResponse { .. }));
}

#[test]
fn test_empty_image_name_is_rejected() {
    let mut server = Server::new();
    let _post = server
        .mock("POST", CLASS_DIAGRAM_PATH)
        .with_status(200)
        .with_body("  ")
        .create();

    let client = YumlClient::new(&server.url()).unwrap();
    let err = client.generate(&diagram()).unwrap_err();
    assert!(err.to_string().contains("empty image name"));
}
