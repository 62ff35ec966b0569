use crate::helpers::spawn_app;

#[actix_rt::test]
async fn contact_returns_200_for_valid_data() {
    let app = spawn_app().await;
    let body = r#"{"name":"Jane","email":"jane@x.com","subject":"Hi","message":"Hello"}"#;

    let response = app.post_contact(body.into()).await;

    assert_eq!(200, response.status().as_u16());
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "success": true, "message": "Message received successfully" })
    );
}

#[actix_rt::test]
async fn contact_returns_400_when_a_field_is_missing() {
    let app = spawn_app().await;

    let test_cases = vec![
        (r#"{"name":"","email":"a@b.com","subject":"s","message":"m"}"#, "empty name"),
        (r#"{"name":"A","email":"a@b.com","message":"m"}"#, "missing subject"),
        (r#"{"name":"A","email":"a@b.com","subject":"s","message":null}"#, "null message"),
        (r#"{"name":"A","email":"","subject":"s","message":"m"}"#, "empty email"),
        ("{}", "missing everything"),
        (r#"{"name":false,"email":"a@b.com","subject":"s","message":"m"}"#, "false name"),
        (r#"{"name":"A","email":"a@b.com","subject":0,"message":"m"}"#, "zero subject"),
        (r#"["A","a@b.com","s","m"]"#, "array body"),
        ("[]", "empty array body"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_contact(invalid_body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail when payload was {}",
            error_message
        );
        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(json, serde_json::json!({ "error": "All fields are required" }));
    }
}

#[actix_rt::test]
async fn contact_returns_400_for_an_invalid_email() {
    let app = spawn_app().await;
    let body = r#"{"name":"A","email":"bad-email","subject":"s","message":"m"}"#;

    let response = app.post_contact(body.into()).await;

    assert_eq!(400, response.status().as_u16());
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Invalid email format" }));
}

#[actix_rt::test]
async fn contact_accepts_whitespace_only_fields() {
    let app = spawn_app().await;
    let body = r#"{"name":"   ","email":"a@b.com","subject":" ","message":"  "}"#;

    let response = app.post_contact(body.into()).await;

    assert_eq!(200, response.status().as_u16());
}

#[actix_rt::test]
async fn contact_returns_500_for_an_unparsable_body() {
    let app = spawn_app().await;

    for invalid_body in ["this is not json", "", "null", r#"{"name":"#] {
        let response = app.post_contact(invalid_body.into()).await;

        assert_eq!(
            500,
            response.status().as_u16(),
            "The API did not fail with 500 when payload was {:?}",
            invalid_body
        );
        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "Something went wrong. Please try again." })
        );
    }
}

#[actix_rt::test]
async fn contact_ignores_the_content_type() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(&format!("{}/api/contact", &app.address))
        .header("Content-Type", "text/plain")
        .body(r#"{"name":"Jane","email":"jane@x.com","subject":"Hi","message":"Hello"}"#)
        .send()
        .await
        .expect("failed to send request");

    assert_eq!(200, response.status().as_u16());
}

#[actix_rt::test]
async fn repeating_a_valid_submission_gives_the_same_answer() {
    let app = spawn_app().await;
    let body = r#"{"name":"Jane","email":"jane@x.com","subject":"Hi","message":"Hello"}"#;

    for _ in 0..3 {
        let response = app.post_contact(body.into()).await;

        assert_eq!(200, response.status().as_u16());
        assert_eq!(
            response.text().await.unwrap(),
            r#"{"success":true,"message":"Message received successfully"}"#
        );
    }
}
