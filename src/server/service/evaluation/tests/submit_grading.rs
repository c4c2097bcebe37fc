use crate::{
    model::teacher::SubmitGradingDto,
    server::{
        data::evaluation::EvaluationRepository,
        error::{request::RequestError, Error},
        service::scoring::DEFAULT_TEACHER_SCORE,
    },
};

use super::*;

fn payload(item_id: i32, person_id: i32, score: Option<f64>, comment: Option<&str>) -> SubmitGradingDto {
    SubmitGradingDto {
        item_id,
        person_id,
        teacher_score: score,
        teacher_comment: comment.map(str::to_string),
        score_ratio: None,
    }
}

/// Expect grading 90 against a self score of 77.5 to weigh in at 83.75
#[tokio::test]
async fn grades_with_default_ratio() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let s = scenario(&test).await?;
    test.training()
        .insert_evaluation(s.employee.person_id, s.item.item_id, Some(77.5), None, 0.5)
        .await?;
    let oracle = ScoringOracle::disabled();

    let result = service(&test, &oracle)
        .submit_grading(
            s.teacher.person_id,
            payload(s.item.item_id, s.employee.person_id, Some(90.0), Some("Solid work")),
        )
        .await?;

    assert_eq!(result.weighted_score, Some(83.75));
    assert_eq!(result.score_ratio, 0.5);
    assert_eq!(result.person_name, "Emma");
    let stored = EvaluationRepository::new(&test.db)
        .find(s.employee.person_id, s.item.item_id)
        .await?
        .unwrap();
    assert_eq!(stored.self_score, Some(77.5));
    assert_eq!(stored.teacher_score, Some(90.0));

    Ok(())
}

/// Expect a comment without a score to be scored by the oracle
#[tokio::test]
async fn scores_comment_with_oracle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .with_oracle_endpoint("82", 1)
        .build()
        .await?;
    let s = scenario(&test).await?;
    test.training()
        .insert_evaluation(s.employee.person_id, s.item.item_id, Some(70.0), None, 0.5)
        .await?;
    let oracle = oracle(&test);

    let result = service(&test, &oracle)
        .submit_grading(
            s.teacher.person_id,
            payload(s.item.item_id, s.employee.person_id, None, Some("Engaged throughout")),
        )
        .await?;

    assert_eq!(result.teacher_score, 82.0);
    test.assert_mocks();

    Ok(())
}

/// Expect a failing oracle to yield the default teacher score
#[tokio::test]
async fn falls_back_to_default_teacher_score() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .with_oracle_error_endpoint(500, 1)
        .build()
        .await?;
    let s = scenario(&test).await?;
    test.training()
        .insert_evaluation(s.employee.person_id, s.item.item_id, Some(70.0), None, 0.5)
        .await?;
    let oracle = oracle(&test);

    let result = service(&test, &oracle)
        .submit_grading(
            s.teacher.person_id,
            payload(s.item.item_id, s.employee.person_id, None, Some("Fine")),
        )
        .await?;

    assert_eq!(result.teacher_score, DEFAULT_TEACHER_SCORE);
    test.assert_mocks();

    Ok(())
}

/// Expect grading to require a score or a comment
#[tokio::test]
async fn requires_score_or_comment() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let s = scenario(&test).await?;
    let oracle = ScoringOracle::disabled();

    let result = service(&test, &oracle)
        .submit_grading(
            s.teacher.person_id,
            payload(s.item.item_id, s.employee.person_id, None, Some("  ")),
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::RequestError(RequestError::Validation(_)))
    ));

    Ok(())
}

/// Expect out of range scores and ratios to be rejected
#[tokio::test]
async fn validates_score_bounds() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let s = scenario(&test).await?;
    let oracle = ScoringOracle::disabled();
    let service = service(&test, &oracle);

    let high = service
        .submit_grading(
            s.teacher.person_id,
            payload(s.item.item_id, s.employee.person_id, Some(101.0), None),
        )
        .await;
    let mut bad_ratio = payload(s.item.item_id, s.employee.person_id, Some(80.0), None);
    bad_ratio.score_ratio = Some(1.5);
    let bad_ratio = service.submit_grading(s.teacher.person_id, bad_ratio).await;

    for result in [high, bad_ratio] {
        assert!(matches!(
            result,
            Err(Error::RequestError(RequestError::Validation(_)))
        ));
    }

    Ok(())
}

/// Expect another teacher to be forbidden and a missing self-evaluation to be not found
#[tokio::test]
async fn rejects_foreign_course_and_missing_evaluation() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let s = scenario(&test).await?;
    let other_teacher = test.people().insert_teacher("Tara").await?;
    let oracle = ScoringOracle::disabled();
    let service = service(&test, &oracle);

    let forbidden = service
        .submit_grading(
            other_teacher.person_id,
            payload(s.item.item_id, s.employee.person_id, Some(80.0), None),
        )
        .await;
    let missing = service
        .submit_grading(
            s.teacher.person_id,
            payload(s.item.item_id, s.employee.person_id, Some(80.0), None),
        )
        .await;

    assert!(matches!(
        forbidden,
        Err(Error::RequestError(RequestError::Forbidden(_)))
    ));
    assert!(matches!(
        missing,
        Err(Error::RequestError(RequestError::NotFound(_)))
    ));

    Ok(())
}

/// Expect the grading result to mirror the stored row, including a resubmitted self score
#[tokio::test]
async fn result_reflects_stored_evaluation() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let s = scenario(&test).await?;
    test.training()
        .insert_evaluation(s.employee.person_id, s.item.item_id, Some(60.0), None, 0.5)
        .await?;
    EvaluationRepository::new(&test.db)
        .upsert_self(s.employee.person_id, s.item.item_id, 80.0, "Second thoughts")
        .await?;
    let oracle = ScoringOracle::disabled();

    let result = service(&test, &oracle)
        .submit_grading(
            s.teacher.person_id,
            SubmitGradingDto {
                score_ratio: Some(0.25),
                ..payload(s.item.item_id, s.employee.person_id, Some(100.0), Some("  Great  "))
            },
        )
        .await?;

    let stored = EvaluationRepository::new(&test.db)
        .find(s.employee.person_id, s.item.item_id)
        .await?
        .unwrap();
    assert_eq!(result.self_score, Some(80.0));
    assert_eq!(result.weighted_score, Some(85.0));
    assert_eq!(result.score_ratio, stored.score_ratio);
    assert_eq!(result.teacher_comment, stored.teacher_comment);

    Ok(())
}
