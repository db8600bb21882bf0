use serde_json::{Map, Value};

use crate::db::models::Collection;
use crate::db::sqlite::SqliteStore;
use crate::error::GymFlowError;

pub const FOODS_LIST_CAP: u64 = 100;
pub const CARD_FIELDS: [&str; 2] = ["Title", "Muscle"];
pub const FOOD_FIELDS: [&str; 2] = ["name", "calories"];

pub async fn find_exercise(store: &SqliteStore, name: &str) -> Result<Value, GymFlowError> {
    store
        .find_document(Collection::Exercises, "Name", name)
        .await?
        .map(strip_id)
        .ok_or(GymFlowError::NotFound("Exercise not found"))
}

/// Title/Muscle cards for one page. `limit = 0` yields an empty page.
pub async fn exercise_cards(
    store: &SqliteStore,
    skip: u64,
    limit: u64,
) -> Result<Vec<Value>, GymFlowError> {
    let cards: Vec<Value> = store
        .list_documents(Collection::Exercises, skip, limit)
        .await?
        .iter()
        .map(|doc| project(doc, &CARD_FIELDS))
        .collect();

    if cards.is_empty() {
        return Err(GymFlowError::NotFound("No exercises found"));
    }
    Ok(cards)
}

pub async fn list_foods(store: &SqliteStore) -> Result<Vec<Value>, GymFlowError> {
    let foods: Vec<Value> = store
        .list_documents(Collection::Foods, 0, FOODS_LIST_CAP)
        .await?
        .iter()
        .map(|doc| project(doc, &FOOD_FIELDS))
        .collect();

    if foods.is_empty() {
        return Err(GymFlowError::NotFound("No food items found"));
    }
    Ok(foods)
}

pub async fn find_food(store: &SqliteStore, name: &str) -> Result<Value, GymFlowError> {
    store
        .find_document(Collection::Foods, "name", name)
        .await?
        .map(strip_id)
        .ok_or(GymFlowError::NotFound("Food not found"))
}

/// Keep only `fields` that exist in `doc`. `_id` is never included.
fn project(doc: &Value, fields: &[&str]) -> Value {
    let Some(obj) = doc.as_object() else {
        return Value::Object(Map::new());
    };
    let picked = fields
        .iter()
        .filter(|f| **f != "_id")
        .filter_map(|f| obj.get(*f).map(|v| (f.to_string(), v.clone())))
        .collect();
    Value::Object(picked)
}

fn strip_id(mut doc: Value) -> Value {
    if let Some(obj) = doc.as_object_mut() {
        obj.remove("_id");
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn seeded() -> SqliteStore {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        store
            .insert_documents(
                Collection::Exercises,
                &[
                    json!({"_id": "a1", "Name": "Squat", "Title": "Back Squat", "Muscle": "Legs", "Level": "Intermediate"}),
                    json!({"_id": "a2", "Name": "Plank", "Title": "Plank"}),
                    json!({"_id": "a3", "Name": "Row", "Title": "Barbell Row", "Muscle": "Back"}),
                ],
            )
            .await
            .unwrap();
        store
    }

    #[test]
    fn project_drops_missing_fields_and_id() {
        let doc = json!({"_id": 1, "name": "Rice", "calories": 130, "protein": 2.7});
        assert_eq!(
            project(&doc, &["_id", "name", "calories", "fat"]),
            json!({"name": "Rice", "calories": 130})
        );
    }

    #[tokio::test]
    async fn find_exercise_hides_id() {
        let store = seeded().await;
        let doc = find_exercise(&store, "Squat").await.unwrap();
        assert_eq!(
            doc,
            json!({"Name": "Squat", "Title": "Back Squat", "Muscle": "Legs", "Level": "Intermediate"})
        );
        assert!(matches!(
            find_exercise(&store, "squat").await,
            Err(GymFlowError::NotFound("Exercise not found"))
        ));
    }

    #[tokio::test]
    async fn cards_page_and_zero_limit() {
        let store = seeded().await;
        let page = exercise_cards(&store, 1, 1).await.unwrap();
        assert_eq!(page, vec![json!({"Title": "Plank"})]);

        let all = exercise_cards(&store, 0, 3).await.unwrap();
        assert_eq!(all.len(), 3);

        assert!(matches!(
            exercise_cards(&store, 0, 0).await,
            Err(GymFlowError::NotFound("No exercises found"))
        ));

        assert!(matches!(
            exercise_cards(&store, 3, 10).await,
            Err(GymFlowError::NotFound("No exercises found"))
        ));
    }

    #[tokio::test]
    async fn foods_capped_at_one_hundred() {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        assert!(matches!(
            list_foods(&store).await,
            Err(GymFlowError::NotFound("No food items found"))
        ));

        let docs: Vec<Value> = (0..120)
            .map(|i| json!({"name": format!("food{i}"), "calories": i, "fat": 1}))
            .collect();
        store.insert_documents(Collection::Foods, &docs).await.unwrap();

        let foods = list_foods(&store).await.unwrap();
        assert_eq!(foods.len(), 100);
        assert_eq!(foods[0], json!({"name": "food0", "calories": 0}));
        assert_eq!(
            find_food(&store, "food119").await.unwrap(),
            json!({"name": "food119", "calories": 119, "fat": 1})
        );
    }
}
