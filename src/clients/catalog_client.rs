use std::collections::BTreeMap;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::catalog_actor::CatalogError;
use crate::domain::{
    GroupCreate, GroupPatch, Ingredient, IngredientCreate, IngredientGroup, IngredientPatch,
};

/// Serialized menu: group name to (ingredient id, name, unit cost) rows.
pub type Menu = BTreeMap<String, Vec<(Uuid, String, f64)>>;

/// Client for the catalog stores (groups and ingredients).
///
/// Carries the administrator CRUD plus the read operations the composer
/// needs. Cross-entity rules live here: group existence checks and the
/// group-delete cascade.
#[derive(Clone)]
pub struct CatalogClient {
    groups: ResourceClient<IngredientGroup>,
    ingredients: ResourceClient<Ingredient>,
}

impl CatalogClient {
    pub fn new(
        groups: ResourceClient<IngredientGroup>,
        ingredients: ResourceClient<Ingredient>,
    ) -> Self {
        Self { groups, ingredients }
    }

    fn comm(e: FrameworkError) -> CatalogError {
        match e {
            FrameworkError::Rejected(msg) => CatalogError::ValidationError(msg),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }

    fn group_err(id: Uuid) -> impl Fn(FrameworkError) -> CatalogError {
        move |e| match e {
            FrameworkError::NotFound(_) => CatalogError::GroupNotFound(id),
            other => Self::comm(other),
        }
    }

    fn ingredient_err(id: Uuid) -> impl Fn(FrameworkError) -> CatalogError {
        move |e| match e {
            FrameworkError::NotFound(_) => CatalogError::IngredientNotFound(id),
            other => Self::comm(other),
        }
    }

    async fn require_group(&self, id: Uuid) -> Result<(), CatalogError> {
        match self.groups.get(id).await.map_err(Self::comm)? {
            Some(_) => Ok(()),
            None => Err(CatalogError::GroupNotFound(id)),
        }
    }

    // --- Groups ---

    #[instrument(skip(self))]
    pub async fn create_group(&self, params: GroupCreate) -> Result<Uuid, CatalogError> {
        debug!("Sending request");
        self.groups.create(params).await.map_err(Self::comm)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn update_group(
        &self,
        id: Uuid,
        patch: GroupPatch,
    ) -> Result<IngredientGroup, CatalogError> {
        debug!("Sending request");
        self.groups.update(id, patch).await.map_err(Self::group_err(id))
    }

    /// Deletes a group and, first, every ingredient in it.
    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn delete_group(&self, id: Uuid) -> Result<(), CatalogError> {
        let members = self.list_ingredients(Some(id)).await?;
        for ingredient in &members {
            self.ingredients
                .delete(ingredient.id)
                .await
                .map_err(Self::ingredient_err(ingredient.id))?;
        }
        self.groups.delete(id).await.map_err(Self::group_err(id))?;
        info!(group_id = %id, removed_ingredients = members.len(), "Ingredient group deleted");
        Ok(())
    }

    /// Groups sorted by name.
    #[instrument(skip(self))]
    pub async fn list_groups(&self) -> Result<Vec<IngredientGroup>, CatalogError> {
        debug!("Sending request");
        let mut groups = self.groups.list().await.map_err(Self::comm)?;
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(groups)
    }

    // --- Ingredients ---

    #[instrument(skip(self))]
    pub async fn create_ingredient(&self, params: IngredientCreate) -> Result<Uuid, CatalogError> {
        debug!("Sending request");
        self.require_group(params.group_id).await?;
        self.ingredients.create(params).await.map_err(Self::comm)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn update_ingredient(
        &self,
        id: Uuid,
        patch: IngredientPatch,
    ) -> Result<Ingredient, CatalogError> {
        debug!("Sending request");
        if let Some(group_id) = patch.group_id {
            self.require_group(group_id).await?;
        }
        self.ingredients.update(id, patch).await.map_err(Self::ingredient_err(id))
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn delete_ingredient(&self, id: Uuid) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.ingredients.delete(id).await.map_err(Self::ingredient_err(id))
    }

    #[instrument(skip(self))]
    pub async fn get_ingredient(&self, id: Uuid) -> Result<Option<Ingredient>, CatalogError> {
        debug!("Sending request");
        self.ingredients.get(id).await.map_err(Self::comm)
    }

    /// Ingredients, optionally restricted to one group, sorted by name.
    #[instrument(skip(self))]
    pub async fn list_ingredients(
        &self,
        group_id: Option<Uuid>,
    ) -> Result<Vec<Ingredient>, CatalogError> {
        debug!("Sending request");
        let mut ingredients: Vec<Ingredient> = self
            .ingredients
            .list()
            .await
            .map_err(Self::comm)?
            .into_iter()
            .filter(|i| group_id.map_or(true, |g| i.group_id == g))
            .collect();
        ingredients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(ingredients)
    }

    /// The catalog serialized for the composition form:
    /// `{ group name: [(ingredient id, name, unit cost), ...] }`.
    #[instrument(skip(self))]
    pub async fn menu(&self) -> Result<Menu, CatalogError> {
        let mut menu = Menu::new();
        for group in self.list_groups().await? {
            let rows = self
                .list_ingredients(Some(group.id))
                .await?
                .into_iter()
                .map(|i| (i.id, i.name, i.unit_cost))
                .collect();
            menu.insert(group.name, rows);
        }
        Ok(menu)
    }

    #[instrument(skip(self))]
    pub async fn menu_json(&self) -> Result<String, CatalogError> {
        let menu = self.menu().await?;
        serde_json::to_string(&menu).map_err(|e| CatalogError::Serialization(e.to_string()))
    }
}
