//! Shared test utilities for lab-db unit tests.

pub(crate) mod helpers {
    use lab_core::entities::{Question, ResearchSchema, Study};
    use lab_core::enums::StudyStatus;

    use crate::LabDb;
    use crate::service::LabService;

    /// Create an in-memory `LabService`.
    pub async fn test_service() -> LabService {
        let db = LabDb::open_local(":memory:").await.unwrap();
        LabService::from_db(db)
    }

    /// A two-question schema: a required text and an optional number.
    pub async fn seed_schema(svc: &LabService) -> ResearchSchema {
        svc.create_schema(
            "Tensile intake",
            Some("Operator notes per specimen"),
            vec![
                Question::text("operator", "Operator").required(),
                Question::number("load", "Peak load (kN)"),
            ],
        )
        .await
        .unwrap()
    }

    /// A study over a fresh seeded schema.
    pub async fn seed_study(svc: &LabService, status: StudyStatus) -> Study {
        let schema = seed_schema(svc).await;
        svc.create_study(&schema.id, "Batch 7", None, status, None, None)
            .await
            .unwrap()
    }
}
