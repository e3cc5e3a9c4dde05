//! Problem lifecycle scenarios driven through the public core API.
//!
//! Mirrors what the HTTP layer does: a model comes in, is validated and
//! converted to an entity, the store mutates, and the stored entity goes
//! back out as a model.

use problems_core::{to_models, validate_problem, Problem, ProblemModel, ProblemsService};

/// Four problems, the last one inactive.
fn seeded() -> (ProblemsService, Vec<String>) {
    let mut service = ProblemsService::new();
    let ids = (1..=4)
        .map(|n| {
            let problem = Problem::new(
                &format!("Problem #{n}"),
                &format!("This is the description of Problem #{n}"),
                n != 4,
            );
            service.create(problem).id.clone()
        })
        .collect();
    (service, ids)
}

fn model(title: &str, description: &str, is_active: bool) -> ProblemModel {
    ProblemModel {
        id: None,
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        is_active,
    }
}

#[test]
fn create_then_read_back() {
    let mut service = ProblemsService::new();
    let input = model("T", "D", true);
    validate_problem(&input).unwrap();

    let id = service.create(input.to_entity()).id.clone();
    assert!(!id.is_empty());
    assert!(service.exists(&id));

    let fetched = service.get_by_id(&id).unwrap().to_model();
    assert_eq!(fetched.id.as_deref(), Some(id.as_str()));
    assert_eq!(fetched.title.as_deref(), Some("T"));
    assert_eq!(fetched.description.as_deref(), Some("D"));
    assert!(fetched.is_active);
}

#[test]
fn create_then_update_keeps_id() {
    let mut service = ProblemsService::new();
    let id = service.create(model("T", "D", true).to_entity()).id.clone();

    let mut update = model("T2", "D", true);
    update.id = Some(id.clone());
    assert!(service.update(update.into()));

    let stored = service.get_by_id(&id).unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.title.as_deref(), Some("T2"));
    assert_eq!(service.len(), 1);
}

#[test]
fn get_by_ids_returns_only_known() {
    let (service, ids) = seeded();
    let found = service.get_by_ids(vec![ids[0].clone(), "missing".to_string()]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, ids[0]);
}

#[test]
fn listing_keeps_inactive_problems() {
    let (service, ids) = seeded();
    let models = to_models(service.get_all());
    assert_eq!(models.len(), 4);
    assert_eq!(models[3].id.as_deref(), Some(ids[3].as_str()));
    assert!(!models[3].is_active);
}

#[test]
fn removing_everything_leaves_empty_list() {
    let (mut service, ids) = seeded();
    for id in &ids {
        let problem = service.get_by_id(id).cloned().unwrap();
        assert!(service.remove(&problem));
    }
    assert!(service.get_all().is_empty());
    assert!(to_models(service.get_all()).is_empty());
}

#[test]
fn removing_twice_is_idempotent() {
    let (mut service, ids) = seeded();
    let problem = service.get_by_id(&ids[1]).cloned().unwrap();
    assert!(service.remove(&problem));
    assert!(!service.remove(&problem));
    assert_eq!(service.len(), 3);
}
