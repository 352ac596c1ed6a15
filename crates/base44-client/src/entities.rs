//! Entity Bindings
//!
//! `base44.entities.<Name>.*`: typed CRUD over a named entity collection.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::js::{call, from_js, namespace, to_js};
use crate::Result;

/// Sort order for `list`/`filter`, rendered the way the SDK expects
/// (`"field"` ascending, `"-field"` descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort<'a> {
    Asc(&'a str),
    Desc(&'a str),
}

impl fmt::Display for Sort<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Asc(field) => write!(f, "{}", field),
            Sort::Desc(field) => write!(f, "-{}", field),
        }
    }
}

/// Handle to one entity collection, e.g. `Entity::<Goal>::new("Goal")`
pub struct Entity<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Entity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Entity<T> {}

impl<T> fmt::Debug for Entity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Entity").field(&self.name).finish()
    }
}

impl<T> Entity<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn handle(&self) -> Result<JsValue> {
        namespace(&["entities", self.name])
    }
}

fn list_args(sort: Option<Sort<'_>>, limit: Option<u32>) -> [JsValue; 2] {
    [
        sort.map(|s| JsValue::from_str(&s.to_string()))
            .unwrap_or(JsValue::UNDEFINED),
        limit.map(JsValue::from).unwrap_or(JsValue::UNDEFINED),
    ]
}

impl<T: DeserializeOwned> Entity<T> {
    /// Records matching `query` (field equality object)
    pub async fn filter<Q: Serialize + ?Sized>(
        &self,
        query: &Q,
        sort: Option<Sort<'_>>,
        limit: Option<u32>,
    ) -> Result<Vec<T>> {
        log::debug!("[BASE44] {}.filter sort={:?} limit={:?}", self.name, sort, limit);
        let [sort, limit] = list_args(sort, limit);
        let result = call(&self.handle()?, "filter", &[to_js(query)?, sort, limit]).await?;
        from_js(result)
    }

    pub async fn list(&self, sort: Option<Sort<'_>>, limit: Option<u32>) -> Result<Vec<T>> {
        log::debug!("[BASE44] {}.list sort={:?} limit={:?}", self.name, sort, limit);
        let [sort, limit] = list_args(sort, limit);
        let result = call(&self.handle()?, "list", &[sort, limit]).await?;
        from_js(result)
    }

    pub async fn create<D: Serialize + ?Sized>(&self, data: &D) -> Result<T> {
        log::debug!("[BASE44] {}.create", self.name);
        let result = call(&self.handle()?, "create", &[to_js(data)?]).await?;
        from_js(result)
    }

    pub async fn update<D: Serialize + ?Sized>(&self, id: &str, data: &D) -> Result<T> {
        log::debug!("[BASE44] {}.update id={}", self.name, id);
        let result = call(
            &self.handle()?,
            "update",
            &[JsValue::from_str(id), to_js(data)?],
        )
        .await?;
        from_js(result)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        log::debug!("[BASE44] {}.delete id={}", self.name, id);
        call(&self.handle()?, "delete", &[JsValue::from_str(id)]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_renders_sdk_syntax() {
        assert_eq!(Sort::Desc("created_date").to_string(), "-created_date");
        assert_eq!(Sort::Asc("title").to_string(), "title");
    }

    #[test]
    fn entity_is_copy_regardless_of_record_type() {
        struct NotClone;
        let goals = Entity::<NotClone>::new("Goal");
        let copy = goals;
        assert_eq!(goals.name(), "Goal");
        assert_eq!(copy.name(), "Goal");
        assert_eq!(format!("{:?}", copy), "Entity(\"Goal\")");
    }
}
