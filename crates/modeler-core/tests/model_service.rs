use modeler_core::{
    AppCore, CoreError, FilterText, ModelType, NewModel, NewModelRelation, RepositoryError, Sort,
    SortField,
};
use modeler_db::TestDb;

async fn app_core() -> (TestDb, AppCore) {
    let db = TestDb::new().await.unwrap();
    let core = AppCore::new(db.repos());
    (db, core)
}

#[tokio::test]
async fn add_rejects_blank_name_and_owner() {
    let (_db, core) = app_core().await;

    let blank_name = core
        .models()
        .add(NewModel::new("  ", "kermit", Some(ModelType::Form)))
        .await;
    assert!(matches!(blank_name, Err(CoreError::Validation(_))));

    let blank_owner = core
        .models()
        .add(NewModel::new("Form", "", Some(ModelType::Form)))
        .await;
    assert!(matches!(blank_owner, Err(CoreError::Validation(_))));
}

#[tokio::test]
async fn get_by_id_maps_missing_to_none() {
    let (_db, core) = app_core().await;
    assert!(core.models().get_by_id(404).await.unwrap().is_none());
    assert!(matches!(
        core.models().find_by_id(404).await,
        Err(CoreError::Repository(RepositoryError::NotFound(_)))
    ));
}

#[tokio::test]
async fn relate_and_navigate() {
    let (_db, core) = app_core().await;
    let models = core.models();
    let app = models
        .add(NewModel::new("App", "kermit", Some(ModelType::App)))
        .await
        .unwrap();
    let form = models
        .add(NewModel::new("Form", "kermit", Some(ModelType::Form)))
        .await
        .unwrap();
    let process = models
        .add(NewModel::new("Process", "kermit", Some(ModelType::Bpmn)))
        .await
        .unwrap();

    models
        .relate(NewModelRelation::new(app.id, form.id).with_relation_type("form-model"))
        .await
        .unwrap();
    models
        .relate(NewModelRelation::new(app.id, process.id))
        .await
        .unwrap();

    let children = models.children(app.id, None).await.unwrap();
    assert_eq!(children.len(), 2);

    let forms = models.children(app.id, Some(ModelType::Form)).await.unwrap();
    assert_eq!(forms, vec![form.clone()]);

    let parents = models.parents(form.id).await.unwrap();
    assert_eq!(parents.len(), 1);
    assert_eq!(parents[0].id, app.id);
    assert_eq!(parents[0].model_type, Some(ModelType::App));
}

#[tokio::test]
async fn relate_rejects_self_reference() {
    let (_db, core) = app_core().await;
    let model = core
        .models()
        .add(NewModel::new("App", "kermit", Some(ModelType::App)))
        .await
        .unwrap();

    let result = core
        .models()
        .relate(NewModelRelation::new(model.id, model.id))
        .await;
    assert!(matches!(result, Err(CoreError::Validation(_))));
}

#[tokio::test]
async fn available_for_includes_unlinked_models() {
    let (_db, core) = app_core().await;
    let models = core.models();
    models
        .add(NewModel::new("Linked", "gonzo", Some(ModelType::DecisionTable)).with_reference_id(5))
        .await
        .unwrap();
    models
        .add(NewModel::new("Free", "gonzo", Some(ModelType::DecisionTable)))
        .await
        .unwrap();
    models
        .add(NewModel::new("Elsewhere", "gonzo", Some(ModelType::DecisionTable)).with_reference_id(6))
        .await
        .unwrap();

    let available = models
        .available_for(ModelType::DecisionTable, 5)
        .await
        .unwrap();
    let mut names: Vec<_> = available.iter().map(|m| m.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Free", "Linked"]);
}

#[tokio::test]
async fn delete_removes_model_and_reports_missing() {
    let (_db, core) = app_core().await;
    let model = core
        .models()
        .add(NewModel::new("Scratch", "kermit", Some(ModelType::Form)))
        .await
        .unwrap();

    core.models().delete(model.id).await.unwrap();
    assert!(core.models().get_by_id(model.id).await.unwrap().is_none());
    assert!(matches!(
        core.models().delete(model.id).await,
        Err(CoreError::Repository(RepositoryError::NotFound(_)))
    ));
}

#[tokio::test]
async fn processes_of_lists_own_standalone_processes() {
    let (_db, core) = app_core().await;
    let models = core.models();
    for model in [
        NewModel::new("Shipping", "kermit", Some(ModelType::Bpmn)),
        NewModel::new("approval", "kermit", None),
        NewModel::new("Legacy Intake", "kermit", Some(ModelType::LegacyProcess))
            .with_description("Routes approvals"),
        NewModel::new("Linked", "kermit", Some(ModelType::Bpmn)).with_reference_id(9),
        NewModel::new("Form", "kermit", Some(ModelType::Form)),
        NewModel::new("Theirs", "gonzo", Some(ModelType::Bpmn)),
    ] {
        models.add(model).await.unwrap();
    }

    let all = models
        .processes_of("kermit", None, Sort::asc(SortField::Name))
        .await
        .unwrap();
    let names: Vec<_> = all.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["approval", "Legacy Intake", "Shipping"]);

    let filter = FilterText::parse("APPROV").unwrap();
    let filtered = models
        .processes_of("kermit", Some(&filter), Sort::desc(SortField::Name))
        .await
        .unwrap();
    let names: Vec<_> = filtered.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Legacy Intake", "approval"]);
}
