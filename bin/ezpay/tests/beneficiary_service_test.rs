mod common;

use common::fixtures::{
    beneficiary, create_add_beneficiary_request, create_add_beneficiary_request_for,
};
use common::{create_app_state_with, create_seeded_app_state, create_test_app_state};
use ezpay_core::services::beneficiary_service::BeneficiaryService;
use ezpay_primitives::error::ApiError;
use ezpay_primitives::models::beneficiary::BeneficiaryChanges;
use ezpay_primitives::models::beneficiary_dto::{AddBeneficiaryRequest, ContactUpdateRequest};
use std::collections::HashSet;

#[tokio::test]
async fn test_add_beneficiary_assigns_fresh_ids() {
    let state = create_seeded_app_state();
    let mut seen: HashSet<u64> = BeneficiaryService::list_beneficiaries(&state)
        .await
        .unwrap()
        .iter()
        .map(|b| b.id)
        .collect();

    for _ in 0..10 {
        let added = BeneficiaryService::add_beneficiary(&state, create_add_beneficiary_request())
            .await
            .unwrap();
        assert!(seen.insert(added.id), "id {} reused", added.id);
    }

    assert_eq!(
        BeneficiaryService::list_beneficiaries(&state).await.unwrap().len(),
        15
    );
}

#[tokio::test]
async fn test_add_beneficiary_normalizes_ifsc_and_prepends() {
    let state = create_seeded_app_state();

    let added = BeneficiaryService::add_beneficiary(
        &state,
        create_add_beneficiary_request_for("5555666677", "utib0000999"),
    )
    .await
    .unwrap();

    assert_eq!(added.ifsc, "UTIB0000999");
    assert_eq!(added.id, 6);

    let all = BeneficiaryService::list_beneficiaries(&state).await.unwrap();
    assert_eq!(all[0].id, added.id);
}

#[tokio::test]
async fn test_add_duplicate_is_rejected_and_store_unchanged() {
    let state = create_app_state_with(vec![beneficiary(1, "1112223334", "abcd0123456", 1)]);
    let before = BeneficiaryService::list_beneficiaries(&state).await.unwrap();

    let result = BeneficiaryService::add_beneficiary(
        &state,
        create_add_beneficiary_request_for("1112223334", "ABCD0123456"),
    )
    .await;

    match result {
        Err(ApiError::Duplicate(_)) => {}
        other => panic!("expected duplicate error, got {:?}", other),
    }

    let after = BeneficiaryService::list_beneficiaries(&state).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_add_invalid_request_never_reaches_store() {
    let state = create_test_app_state();

    let req = AddBeneficiaryRequest {
        name: "Al".to_string(),
        ifsc: "HDFC1234567".to_string(),
        ..create_add_beneficiary_request()
    };

    let err = BeneficiaryService::add_beneficiary(&state, req)
        .await
        .unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            let fields = errors.field_errors();
            assert!(fields.contains_key("name"));
            assert!(fields.contains_key("ifsc"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    assert!(state.beneficiaries.is_empty().unwrap());
}

#[tokio::test]
async fn test_get_beneficiary_missing_is_none() {
    let state = create_seeded_app_state();

    assert!(BeneficiaryService::get_beneficiary(&state, 2)
        .await
        .unwrap()
        .is_some());
    assert!(BeneficiaryService::get_beneficiary(&state, 99)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_reads_return_copies() {
    let state = create_seeded_app_state();

    let mut snapshot = BeneficiaryService::list_beneficiaries(&state).await.unwrap();
    snapshot[0].name = "Mutated".to_string();
    snapshot.clear();

    let fresh = BeneficiaryService::list_beneficiaries(&state).await.unwrap();
    assert_eq!(fresh.len(), 5);
    assert!(fresh.iter().all(|b| b.name != "Mutated"));
}

#[tokio::test]
async fn test_search_filters() {
    let state = create_seeded_app_state();

    let by_account = BeneficiaryService::find_by_account_number(&state, "9988776655")
        .await
        .unwrap();
    assert_eq!(by_account.len(), 1);
    assert_eq!(by_account[0].name, "Priya Sharma");

    let by_name = BeneficiaryService::find_by_name_or_account(&state, "SHIZUKA")
        .await
        .unwrap();
    assert_eq!(by_name.len(), 1);

    let by_partial_account = BeneficiaryService::find_by_name_or_account(&state, "91234")
        .await
        .unwrap();
    assert_eq!(by_partial_account.len(), 1);
    assert_eq!(by_partial_account[0].id, 3);

    let hdfc = BeneficiaryService::find_by_bank_or_ifsc(&state, "hdfc")
        .await
        .unwrap();
    assert_eq!(hdfc.len(), 3);

    let sbin = BeneficiaryService::find_by_bank_or_ifsc(&state, "sbin0000")
        .await
        .unwrap();
    assert_eq!(sbin.len(), 1);

    let everything = BeneficiaryService::search(&state, "   ").await.unwrap();
    assert_eq!(everything.len(), 5);

    let icici = BeneficiaryService::search(&state, " icic ").await.unwrap();
    assert_eq!(icici.len(), 1);
}

#[tokio::test]
async fn test_recent_beneficiaries_ordering() {
    let state = create_app_state_with(vec![
        beneficiary(1, "1000000001", "ABCD0000001", 10),
        beneficiary(2, "1000000002", "ABCD0000002", 1),
        beneficiary(3, "1000000003", "ABCD0000003", 7),
        beneficiary(4, "1000000004", "ABCD0000004", 3),
        beneficiary(5, "1000000005", "ABCD0000005", 5),
    ]);

    let recent = BeneficiaryService::recent_beneficiaries(&state, Some(3))
        .await
        .unwrap();

    assert_eq!(recent.len(), 3);
    assert!(recent
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));
    assert_eq!(
        recent.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![2, 4, 5]
    );

    let default_limit = BeneficiaryService::recent_beneficiaries(&state, None)
        .await
        .unwrap();
    assert_eq!(default_limit.len(), 5);
}

#[tokio::test]
async fn test_update_uppercases_ifsc() {
    let state = create_seeded_app_state();

    let changes = BeneficiaryChanges {
        ifsc: Some("hdfc0001234".to_string()),
        ..Default::default()
    };
    let updated = BeneficiaryService::update_beneficiary(&state, 2, changes)
        .await
        .unwrap();

    assert_eq!(updated.ifsc, "HDFC0001234");
    assert_eq!(updated.name, "Priya Sharma");

    let stored = BeneficiaryService::get_beneficiary(&state, 2)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_only_touches_supplied_fields() {
    let state = create_seeded_app_state();
    let original = state.beneficiaries.get_by_id(4).unwrap().unwrap();

    let changes = BeneficiaryChanges {
        name: Some("Jay P.".to_string()),
        ..Default::default()
    };
    let updated = BeneficiaryService::update_beneficiary(&state, 4, changes)
        .await
        .unwrap();

    assert_eq!(updated.name, "Jay P.");
    assert_eq!(updated.account_number, original.account_number);
    assert_eq!(updated.email, original.email);
    assert_eq!(updated.created_at, original.created_at);
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let state = create_seeded_app_state();
    let before = state.beneficiaries.list().unwrap();

    let changes = BeneficiaryChanges {
        name: Some("Nobody".to_string()),
        ..Default::default()
    };
    let err = BeneficiaryService::update_beneficiary(&state, 42, changes)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(state.beneficiaries.list().unwrap(), before);
}

#[tokio::test]
async fn test_update_contact_blank_email_clears_it() {
    let state = create_seeded_app_state();

    let req = ContactUpdateRequest {
        email: Some("  ".to_string()),
        phone: "98765-43210".to_string(),
    };
    let updated = BeneficiaryService::update_contact(&state, 2, req)
        .await
        .unwrap();

    assert_eq!(updated.email, None);
    assert_eq!(updated.phone.as_deref(), Some("98765-43210"));
}

#[tokio::test]
async fn test_update_contact_blank_phone_is_rejected() {
    let state = create_seeded_app_state();

    let req = ContactUpdateRequest {
        email: Some("new.priya@example.com".to_string()),
        phone: "  ".to_string(),
    };
    let err = BeneficiaryService::update_contact(&state, 2, req)
        .await
        .unwrap_err();

    match err {
        ApiError::Validation(errors) => assert!(errors.field_errors().contains_key("phone")),
        other => panic!("expected validation error, got {:?}", other),
    }

    let stored = state.beneficiaries.get_by_id(2).unwrap().unwrap();
    assert_eq!(stored.email.as_deref(), Some("priya@example.com"));
    assert_eq!(stored.phone.as_deref(), Some("9123456789"));
}

#[tokio::test]
async fn test_update_contact_rejects_bad_phone() {
    let state = create_seeded_app_state();

    let req = ContactUpdateRequest {
        email: None,
        phone: "12345".to_string(),
    };
    let err = BeneficiaryService::update_contact(&state, 2, req)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(
        state.beneficiaries.get_by_id(2).unwrap().unwrap().phone.as_deref(),
        Some("9123456789")
    );
}

#[tokio::test]
async fn test_update_with_blank_ifsc_keeps_stored_value() {
    let state = create_seeded_app_state();

    let changes = BeneficiaryChanges {
        ifsc: Some("   ".to_string()),
        bank_name: Some("ICICI".to_string()),
        ..Default::default()
    };
    let updated = BeneficiaryService::update_beneficiary(&state, 2, changes)
        .await
        .unwrap();

    assert_eq!(updated.ifsc, "ICIC0000123");
    assert_eq!(updated.bank_name, "ICICI");
}

#[tokio::test]
async fn test_padded_ifsc_duplicate_is_rejected() {
    let state = create_test_app_state();

    BeneficiaryService::add_beneficiary(
        &state,
        create_add_beneficiary_request_for("1112223334", "ABCD0123456"),
    )
    .await
    .unwrap();

    let result = state.beneficiaries.add(
        create_add_beneficiary_request_for("1112223334", " abcd0123456 ").into_new_beneficiary(),
    );

    assert!(result.unwrap_err().is_duplicate());
    assert_eq!(state.beneficiaries.len().unwrap(), 1);
}

#[tokio::test]
async fn test_delete_beneficiary_twice() {
    let state = create_seeded_app_state();

    assert!(BeneficiaryService::delete_beneficiary(&state, 3).await.unwrap());
    assert_eq!(state.beneficiaries.len().unwrap(), 4);
    assert!(BeneficiaryService::get_beneficiary(&state, 3)
        .await
        .unwrap()
        .is_none());

    assert!(!BeneficiaryService::delete_beneficiary(&state, 3).await.unwrap());
    assert_eq!(state.beneficiaries.len().unwrap(), 4);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let state = create_seeded_app_state();

    BeneficiaryService::delete_beneficiary(&state, 5).await.unwrap();
    let added = BeneficiaryService::add_beneficiary(&state, create_add_beneficiary_request())
        .await
        .unwrap();

    assert_eq!(added.id, 6);
}
