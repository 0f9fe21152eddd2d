use std::collections::HashMap;

use crate::core::aliases::ShotId;
use crate::core::models::BaseEntity;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    Unordered,
    IdAsc,
    IdDesc,
}

trait QueryableStore<T: BaseEntity> {
    fn items(&self) -> &HashMap<ShotId, T>;
}

struct FilterSorter<'a, T: BaseEntity> {
    filters: Vec<Box<dyn Fn(&T) -> bool + 'a>>,
    sort: Sort,
}

impl<'a, T: BaseEntity> FilterSorter<'a, T> {
    fn new() -> Self {
        Self {
            filters: Vec::new(),
            sort: Sort::Unordered,
        }
    }

    fn push_filter(mut self, pred: impl Fn(&T) -> bool + 'a) -> Self {
        self.filters.push(Box::new(pred));
        self
    }

    fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    fn sorted<'s>(&self, items: &'s HashMap<ShotId, T>) -> Vec<&'s T> {
        let mut out: Vec<&T> = items
            .values()
            .filter(|e| self.filters.iter().all(|f| f(e)))
            .collect();

        match self.sort {
            Sort::Unordered => {}
            Sort::IdAsc => out.sort_by_key(|e| e.id()),
            Sort::IdDesc => out.sort_by_key(|e| std::cmp::Reverse(e.id())),
        }
        out
    }
}

/// Id-keyed shot store. Ids grow monotonically, so ascending id order is
/// also insertion order.
#[derive(Debug)]
pub struct Repository<T: BaseEntity> {
    items: HashMap<ShotId, T>,
    next_id: ShotId,
}

impl<T: BaseEntity> Default for Repository<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1,
        }
    }
}

impl<T: BaseEntity> QueryableStore<T> for Repository<T> {
    fn items(&self) -> &HashMap<ShotId, T> {
        &self.items
    }
}

impl<T: BaseEntity> Repository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peek_next_id(&self) -> ShotId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ShotId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn insert(&mut self, mut entity: T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        entity.set_id(id);
        self.items.entry(id).or_insert(entity)
    }

    /// Inserts keeping the entity's own id (used when loading a saved shoot).
    pub fn insert_with_id(&mut self, entity: T) -> Result<()> {
        let id = entity.id();
        if id <= 0 {
            return Err(Error::Parse("ID must be positive.".into()));
        }
        if self.items.contains_key(&id) {
            return Err(Error::Parse(format!("Shot with id {} already exists.", id)));
        }
        self.next_id = self.next_id.max(id + 1);
        self.items.insert(id, entity);
        Ok(())
    }

    pub fn get(&self, id: ShotId) -> Result<&T> {
        self.items.get(&id).ok_or(Error::ShotNotFound(id))
    }

    /// Writes back an updated copy of an existing entity.
    pub fn replace(&mut self, entity: T) -> Result<()> {
        let id = entity.id();
        let slot = self.items.get_mut(&id).ok_or(Error::ShotNotFound(id))?;
        *slot = entity;
        Ok(())
    }

    pub fn delete(&mut self, id: ShotId) -> Result<T> {
        self.items.remove(&id).ok_or(Error::ShotNotFound(id))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.next_id = 1;
    }

    pub fn values(&self, sort: Sort) -> Vec<&T> {
        self.query().order(sort).collect()
    }

    /// Owned copy of every entity in insertion order. The scheduling core
    /// works on this snapshot, never on the store itself.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values(Sort::IdAsc).into_iter().cloned().collect()
    }

    /// Replaces the contents with a functionally updated snapshot.
    /// Entities keep their ids; the id counter never moves backwards.
    pub fn apply_snapshot(&mut self, entities: Vec<T>) -> Result<()> {
        let mut items = HashMap::with_capacity(entities.len());
        for entity in entities {
            let id = entity.id();
            if items.insert(id, entity).is_some() {
                return Err(Error::Parse(format!("Shot with id {} already exists.", id)));
            }
        }
        let next_id = items
            .keys()
            .max()
            .map(|m| m + 1)
            .unwrap_or(1)
            .max(self.next_id);
        self.items = items;
        self.next_id = next_id;
        Ok(())
    }

    pub fn query(&self) -> Query<'_, T> {
        Query::new(self)
    }
}

pub struct Query<'a, T: BaseEntity> {
    store: &'a dyn QueryableStore<T>,
    fs: FilterSorter<'a, T>,
}

impl<'a, T: BaseEntity> Query<'a, T> {
    fn new(store: &'a dyn QueryableStore<T>) -> Self {
        Self {
            store,
            fs: FilterSorter::new(),
        }
    }

    pub fn r#where(mut self, pred: impl Fn(&T) -> bool + 'a) -> Self {
        self.fs = self.fs.push_filter(pred);
        self
    }

    pub fn order(mut self, sort: Sort) -> Self {
        self.fs = self.fs.with_sort(sort);
        self
    }

    pub fn collect(self) -> Vec<&'a T> {
        self.fs.sorted(self.store.items())
    }

    pub fn exists(self) -> bool {
        self.store
            .items()
            .values()
            .any(|e| self.fs.filters.iter().all(|f| f(e)))
    }
}
