//! On-disk persistence: data written through one service is visible after
//! reopening the same database file.

use lab_core::entities::{Answers, Question};
use lab_core::enums::{StandardBody, StudyStatus};
use lab_db::service::LabService;
use lab_db::updates::study::StudyUpdateBuilder;
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

fn db_path(dir: &TempDir) -> String {
    dir.path().join("protolab.db").to_string_lossy().into_owned()
}

#[tokio::test]
async fn reopen_keeps_everything() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    let (schema_id, study_id, response_id) = {
        let svc = LabService::new_local(&path).await.unwrap();
        let schema = svc
            .create_schema(
                "Hardness survey",
                None,
                vec![
                    Question::scale("hrc", "Rockwell C", 20.0, 70.0).required(),
                    Question::multiple_choice("marks", "Surface marks", ["scratch", "pit"]),
                ],
            )
            .await
            .unwrap();
        let study = svc
            .create_study(&schema.id, "Line 3", None, StudyStatus::Active, None, None)
            .await
            .unwrap();
        let response = svc
            .create_response(
                &study.id,
                Answers::from([
                    ("hrc".to_string(), json!(55)),
                    ("marks".to_string(), json!(["pit"])),
                ]),
            )
            .await
            .unwrap();
        svc.create_protocol("ISO 6508-1", "Rockwell hardness", StandardBody::Iso, None, None)
            .await
            .unwrap();
        (schema.id, study.id, response.id)
    };

    let svc = LabService::new_local(&path).await.unwrap();
    let schema = svc.get_schema(&schema_id).await.unwrap();
    assert_eq!(schema.questions.len(), 2);
    assert!(schema.questions[0].required);

    let study = svc.get_study(&study_id).await.unwrap();
    assert_eq!(study.status, StudyStatus::Active);

    let response = svc.get_response(&response_id).await.unwrap();
    assert_eq!(response.answers["marks"], json!(["pit"]));

    assert_eq!(svc.list_protocols(None, 10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn study_lifecycle_on_disk() {
    let dir = TempDir::new().unwrap();
    let svc = LabService::new_local(&db_path(&dir)).await.unwrap();

    let schema = svc
        .create_schema("Intake", None, vec![Question::text("note", "Note")])
        .await
        .unwrap();
    let study = svc
        .create_study(&schema.id, "Pilot", None, StudyStatus::Draft, None, None)
        .await
        .unwrap();

    let activated = svc
        .update_study(
            &study.id,
            StudyUpdateBuilder::new()
                .status(StudyStatus::Active)
                .title("Pilot run")
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(activated.status, StudyStatus::Active);
    assert_eq!(activated.title, "Pilot run");

    for _ in 0..2 {
        svc.create_response(&study.id, Answers::new()).await.unwrap();
    }
    assert_eq!(svc.count_responses(&study.id).await.unwrap(), 2);

    svc.delete_study(&study.id).await.unwrap();
    assert_eq!(svc.count_responses(&study.id).await.unwrap(), 0);
    assert!(svc.get_schema(&schema.id).await.is_ok());
}
