//! Skill store.
//!
//! Keyed by id across all tenants; every read and write checks the caller's
//! tenant against the stored skill.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use roster_engine::{Command, Skill, SkillId, TenantId};

/// Store errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("No Skill entity found with ID ({0}).")]
    NotFound(SkillId),

    #[error("The tenantId ({expected}) does not match the persistable ({name})'s tenantId ({actual}).")]
    TenantMismatch {
        expected: TenantId,
        name: String,
        actual: TenantId,
    },

    #[error("Skill has no ID")]
    MissingId,
}

/// Thread-safe skill storage shared across handlers via `Arc`.
#[derive(Debug)]
pub struct SkillStore {
    skills: DashMap<SkillId, Skill>,
    next_id: AtomicU64,
}

impl Default for SkillStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillStore {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            skills: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create an empty store wrapped in Arc for sharing.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Create one skill per name for the tenant.
    pub fn seed<I, S>(&self, tenant_id: TenantId, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(|name| self.create(Skill::new(tenant_id, name)))
            .count()
    }

    /// All skills of a tenant, ordered by id.
    pub fn list(&self, tenant_id: TenantId) -> Vec<Skill> {
        let mut skills: Vec<Skill> = self
            .skills
            .iter()
            .filter(|entry| entry.value().tenant_id == tenant_id)
            .map(|entry| entry.value().clone())
            .collect();
        skills.sort_by_key(|skill| skill.id);
        skills
    }

    /// One skill of a tenant.
    pub fn get(&self, tenant_id: TenantId, id: SkillId) -> Result<Skill, StoreError> {
        let skill = self
            .skills
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound(id))?;
        check_tenant(tenant_id, &skill)?;
        Ok(skill)
    }

    /// Insert a skill under a fresh id. Any id on the input is ignored.
    pub fn create(&self, skill: Skill) -> Skill {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = Skill {
            id: Some(id),
            ..skill
        };
        self.skills.insert(id, stored.clone());
        stored
    }

    /// Replace an existing skill of the same tenant.
    pub fn update(&self, skill: Skill) -> Result<Skill, StoreError> {
        let id = skill.id.ok_or(StoreError::MissingId)?;
        let mut entry = self.skills.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        check_tenant(entry.tenant_id, &skill)?;
        *entry = skill.clone();
        Ok(skill)
    }

    /// Remove a skill of the tenant. Returns whether it existed.
    pub fn remove(&self, tenant_id: TenantId, id: SkillId) -> Result<bool, StoreError> {
        match self.skills.entry(id) {
            Entry::Occupied(entry) => {
                check_tenant(tenant_id, entry.get())?;
                entry.remove();
                Ok(true)
            }
            Entry::Vacant(_) => Ok(false),
        }
    }

    /// Apply a committed row command.
    pub fn apply(&self, command: Command<Skill>) -> Result<(), StoreError> {
        match command {
            Command::Create(skill) => {
                self.create(skill);
            }
            Command::Update(skill) => {
                self.update(skill)?;
            }
            Command::Remove(skill) => {
                let id = skill.id.ok_or(StoreError::MissingId)?;
                if !self.remove(skill.tenant_id, id)? {
                    return Err(StoreError::NotFound(id));
                }
            }
        }
        Ok(())
    }

    /// Drop every skill and restart ids at 1.
    pub fn clear(&self) {
        self.skills.clear();
        self.next_id.store(1, Ordering::Relaxed);
    }

    /// Number of skills across all tenants.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

fn check_tenant(expected: TenantId, skill: &Skill) -> Result<(), StoreError> {
    if skill.tenant_id == expected {
        Ok(())
    } else {
        Err(StoreError::TenantMismatch {
            expected,
            name: skill.name.clone(),
            actual: skill.tenant_id,
        })
    }
}
