mod utils;

use utils::prelude::*;

#[tokio::test]
async fn empty_catalogue() {
    let env = setup().await;

    let res = env.get("/documents").send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_json_eq!(body, json!([]));
}

#[tokio::test]
async fn list_is_ordered_by_name() {
    let env = setup().await;

    let transcript = env.create_document("Histórico escolar", 5).await;
    let declaration = env.create_document("Declaração de matrícula", 2).await;

    let res = env.get("/documents").send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_json_eq!(
        body,
        json!([
            {
                "id": declaration,
                "name": "Declaração de matrícula",
                "description": "Declaração de matrícula description",
                "attendance_deadline": 2,
            },
            {
                "id": transcript,
                "name": "Histórico escolar",
                "description": "Histórico escolar description",
                "attendance_deadline": 5,
            },
        ])
    );
}

#[tokio::test]
async fn name_is_required() {
    let env = setup().await;

    let res = env
        .post("/documents")
        .json(&json!({
            "name": "",
            "description": "something",
            "attendance_deadline": 3,
        }))
        .send()
        .await;

    assert_error!(res, error::JSON_VALIDATE_INVALID);
}

#[tokio::test]
async fn missing_fields() {
    let env = setup().await;

    let res = env
        .post("/documents")
        .json(&json!({ "name": "Histórico" }))
        .send()
        .await;

    assert_error!(res, error::JSON_MISSING_FIELDS);
}

#[tokio::test]
async fn liveness() {
    let env = setup().await;

    let res = env.get("/livez").send().await;
    assert_eq!(res.status(), StatusCode::OK);
}
