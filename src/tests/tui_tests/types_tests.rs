use crate::tui::types::*;

#[test]
fn test_tab_default_is_chat() {
    assert_eq!(Tab::default(), Tab::Chat);
}

#[test]
fn test_tab_storage_values() {
    assert_eq!(Tab::Chat.storage_value(), "chat");
    assert_eq!(Tab::Recipes.storage_value(), "recipes");
    assert_eq!(Tab::Substitutions.storage_value(), "substitutions");

    for tab in Tab::all() {
        assert_eq!(Tab::from_storage_value(tab.storage_value()), Some(tab));
    }
}

#[test]
fn test_tab_unknown_storage_value() {
    assert_eq!(Tab::from_storage_value(""), None);
    assert_eq!(Tab::from_storage_value("Chat"), None);
    assert_eq!(Tab::from_storage_value("settings"), None);
}

#[test]
fn test_tab_cycle() {
    assert_eq!(Tab::Chat.next(), Tab::Recipes);
    assert_eq!(Tab::Recipes.next(), Tab::Substitutions);
    assert_eq!(Tab::Substitutions.next(), Tab::Chat);

    assert_eq!(Tab::Chat.previous(), Tab::Substitutions);
    assert_eq!(Tab::Substitutions.previous(), Tab::Recipes);
}

#[test]
fn test_tab_display() {
    let labels: Vec<&str> = Tab::all().iter().map(|tab| tab.label()).collect();
    assert_eq!(labels, vec!["Chat", "Recipes", "Substitutions"]);

    for (i, tab) in Tab::all().iter().enumerate() {
        assert_eq!(tab.index(), i);
        assert_eq!(tab.hotkey() as usize, i + 1);
    }
}

#[test]
fn test_active_tab_key() {
    assert_eq!(ACTIVE_TAB_KEY, "chefmate.activeTab");
}

#[test]
fn test_backend_status_labels() {
    assert_eq!(BackendStatus::Checking.label(), "Checking");
    assert_eq!(BackendStatus::Live.label(), "Live");
    assert_eq!(BackendStatus::Offline("refused".to_string()).label(), "Offline");
}

#[test]
fn test_field_defaults() {
    assert_eq!(RecipeField::default(), RecipeField::Ingredients);
    assert_eq!(SubstitutionField::default(), SubstitutionField::Ingredient);
}
