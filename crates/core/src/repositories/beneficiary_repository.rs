use chrono::Utc;
use ezpay_primitives::error::ApiError;
use ezpay_primitives::models::beneficiary::{Beneficiary, BeneficiaryChanges, NewBeneficiary};
use ezpay_primitives::models::DEFAULT_RECENT_LIMIT;
use ezpay_primitives::utility::normalize_ifsc;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct Inner {
    // Newest insert first.
    records: Vec<Beneficiary>,
    next_id: u64,
}

/// In-memory beneficiary store. Every read hands back owned copies.
#[derive(Debug)]
pub struct BeneficiaryRepository {
    inner: RwLock<Inner>,
}

impl Default for BeneficiaryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BeneficiaryRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Starts from existing records; ids continue after the largest seeded id.
    /// Seeds sharing an (account, IFSC) pair are rejected.
    pub fn with_seed(records: Vec<Beneficiary>) -> Result<Self, ApiError> {
        let mut seeded: Vec<Beneficiary> = Vec::with_capacity(records.len());

        for mut b in records {
            b.ifsc = normalize_ifsc(&b.ifsc);
            if seeded
                .iter()
                .any(|s| s.matches_account(&b.account_number, &b.ifsc))
            {
                return Err(ApiError::Duplicate(format!(
                    "Seed contains account {} and IFSC {} more than once",
                    b.account_number, b.ifsc
                )));
            }
            seeded.push(b);
        }

        let next_id = seeded
            .iter()
            .map(|b| b.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| ApiError::Internal("Seeded beneficiary id out of range".into()))?;

        Ok(Self {
            inner: RwLock::new(Inner {
                records: seeded,
                next_id,
            }),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, ApiError> {
        self.inner
            .read()
            .map_err(|_| ApiError::Internal("Beneficiary store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, ApiError> {
        self.inner
            .write()
            .map_err(|_| ApiError::Internal("Beneficiary store lock poisoned".into()))
    }

    pub fn add(&self, payload: NewBeneficiary) -> Result<Beneficiary, ApiError> {
        let ifsc = normalize_ifsc(&payload.ifsc);
        let mut inner = self.write()?;

        if inner
            .records
            .iter()
            .any(|b| b.matches_account(&payload.account_number, &ifsc))
        {
            return Err(ApiError::Duplicate(format!(
                "Beneficiary already exists for account {} and IFSC {}",
                payload.account_number, ifsc
            )));
        }

        let id = inner.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| ApiError::Internal("Beneficiary ids exhausted".into()))?;

        let beneficiary = Beneficiary {
            id,
            name: payload.name,
            account_number: payload.account_number,
            bank_name: payload.bank_name,
            ifsc,
            email: payload.email,
            phone: payload.phone,
            created_at: Utc::now(),
        };

        inner.next_id = next_id;
        inner.records.insert(0, beneficiary.clone());

        Ok(beneficiary)
    }

    pub fn list(&self) -> Result<Vec<Beneficiary>, ApiError> {
        Ok(self.read()?.records.clone())
    }

    pub fn get_by_id(&self, id: u64) -> Result<Option<Beneficiary>, ApiError> {
        Ok(self.read()?.records.iter().find(|b| b.id == id).cloned())
    }

    pub fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Vec<Beneficiary>, ApiError> {
        self.filter(|b| b.account_number == account_number)
    }

    pub fn find_by_name_or_account(&self, term: &str) -> Result<Vec<Beneficiary>, ApiError> {
        let term = term.to_lowercase();
        self.filter(|b| {
            b.name.to_lowercase().contains(&term)
                || b.account_number.to_lowercase().contains(&term)
        })
    }

    pub fn find_by_bank_or_ifsc(&self, term: &str) -> Result<Vec<Beneficiary>, ApiError> {
        let term = term.to_lowercase();
        self.filter(|b| {
            b.bank_name.to_lowercase().contains(&term) || b.ifsc.to_lowercase().contains(&term)
        })
    }

    /// Free-text filter over name, bank, IFSC and account number. A blank
    /// term matches everything.
    pub fn search(&self, term: &str) -> Result<Vec<Beneficiary>, ApiError> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.list();
        }

        self.filter(|b| {
            b.name.to_lowercase().contains(&term)
                || b.bank_name.to_lowercase().contains(&term)
                || b.ifsc.to_lowercase().contains(&term)
                || b.account_number.to_lowercase().contains(&term)
        })
    }

    pub fn recent(&self, limit: Option<usize>) -> Result<Vec<Beneficiary>, ApiError> {
        let mut out = self.list()?;
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out.truncate(limit.unwrap_or(DEFAULT_RECENT_LIMIT));
        Ok(out)
    }

    pub fn update(&self, id: u64, changes: &BeneficiaryChanges) -> Result<Beneficiary, ApiError> {
        let mut inner = self.write()?;

        let idx = inner
            .records
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| ApiError::NotFound("Beneficiary not found".into()))?;

        let updated = changes.apply_to(&inner.records[idx]);

        if inner
            .records
            .iter()
            .any(|b| b.id != id && b.matches_account(&updated.account_number, &updated.ifsc))
        {
            return Err(ApiError::Duplicate(format!(
                "Another beneficiary already uses account {} and IFSC {}",
                updated.account_number, updated.ifsc
            )));
        }

        inner.records[idx] = updated.clone();
        Ok(updated)
    }

    pub fn delete(&self, id: u64) -> Result<bool, ApiError> {
        let mut inner = self.write()?;
        let initial = inner.records.len();
        inner.records.retain(|b| b.id != id);
        Ok(inner.records.len() < initial)
    }

    pub fn len(&self) -> Result<usize, ApiError> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> Result<bool, ApiError> {
        Ok(self.len()? == 0)
    }

    fn filter<F>(&self, predicate: F) -> Result<Vec<Beneficiary>, ApiError>
    where
        F: Fn(&Beneficiary) -> bool,
    {
        Ok(self
            .read()?
            .records
            .iter()
            .filter(|&b| predicate(b))
            .cloned()
            .collect())
    }
}
