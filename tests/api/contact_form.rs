use crate::helpers::spawn_app;

#[actix_rt::test]
async fn valid_form_redirects_to_the_prefilled_form_service() {
    let app = spawn_app().await;
    let body = "name=Jane&email=jane%40x.com&subject=Hi&message=Hello";

    let response = app.post_contact_form(body.into()).await;

    assert_eq!(303, response.status().as_u16());
    let location = response
        .headers()
        .get("Location")
        .expect("no Location header")
        .to_str()
        .unwrap();
    assert_eq!(
        location,
        format!(
            "{}?name=Jane&email=jane%40x.com&subject=Hi&message=Hello",
            app.form_service_url
        )
    );
}

#[actix_rt::test]
async fn blank_fields_are_reported_per_field() {
    let app = spawn_app().await;
    let body = "name=+++&email=jane%40x.com&subject=Hi";

    let response = app.post_contact_form(body.into()).await;

    assert_eq!(400, response.status().as_u16());
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "errors": {
                "name": "Name is required",
                "message": "Message is required"
            }
        })
    );
}

#[actix_rt::test]
async fn malformed_email_is_reported() {
    let app = spawn_app().await;
    let body = "name=A&email=a%40b&subject=s&message=m";

    let response = app.post_contact_form(body.into()).await;

    assert_eq!(400, response.status().as_u16());
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "errors": { "email": "Invalid email format" } })
    );
}
