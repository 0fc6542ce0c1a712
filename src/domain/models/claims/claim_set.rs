//! 순서를 보존하는 클레임 집합
//!
//! 클레임 목록은 타입 중복을 허용하는 순서 있는 시퀀스입니다. `ClaimSet`은 그 위에
//! 타입 인덱스와 `(type, value)` 인덱스를 유지하여 "타입이 없을 때만 추가"와
//! "정확히 같은 클레임이 없을 때만 병합"을 O(1)로 판정합니다.
//! 기존 클레임은 절대 제거하지 않습니다.

use std::collections::HashSet;
use super::claim::Claim;

#[derive(Debug, Clone, Default)]
pub struct ClaimSet {
    claims: Vec<Claim>,
    types: HashSet<String>,
    pairs: HashSet<(String, String)>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 주어진 순서 그대로 모든 클레임을 담은 집합을 만듭니다 (입력의 중복도 유지).
    pub fn from_claims<I>(claims: I) -> Self
    where
        I: IntoIterator<Item = Claim>,
    {
        let mut set = Self::new();
        set.extend(claims);
        set
    }

    /// 조건 없이 클레임을 추가합니다.
    pub fn push(&mut self, claim: Claim) {
        self.types.insert(claim.claim_type.clone());
        self.pairs.insert((claim.claim_type.clone(), claim.value.clone()));
        self.claims.push(claim);
    }

    /// 조건 없이 여러 클레임을 추가합니다.
    pub fn extend<I>(&mut self, claims: I)
    where
        I: IntoIterator<Item = Claim>,
    {
        for claim in claims {
            self.push(claim);
        }
    }

    /// 같은 타입의 클레임이 없을 때만 추가합니다.
    ///
    /// # Returns
    ///
    /// 실제로 추가되었으면 `true`
    pub fn insert_if_absent(&mut self, claim: Claim) -> bool {
        if self.contains_type(&claim.claim_type) {
            return false;
        }

        self.push(claim);
        true
    }

    /// 정확히 같은 `(type, value)` 쌍이 없는 클레임만 뒤에 이어 붙입니다.
    ///
    /// 같은 타입의 다른 값(예: 여러 `role`)은 허용됩니다.
    pub fn merge<I>(&mut self, claims: I)
    where
        I: IntoIterator<Item = Claim>,
    {
        for claim in claims {
            if !self.contains(&claim.claim_type, &claim.value) {
                self.push(claim);
            }
        }
    }

    pub fn contains_type(&self, claim_type: &str) -> bool {
        self.types.contains(claim_type)
    }

    pub fn contains(&self, claim_type: &str, value: &str) -> bool {
        self.pairs.contains(&(claim_type.to_string(), value.to_string()))
    }

    /// 해당 타입의 모든 값을 순서대로 반환합니다.
    pub fn values_of<'a>(&'a self, claim_type: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.claims
            .iter()
            .filter(move |claim| claim.is_type(claim_type))
            .map(|claim| claim.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Claim> {
        self.claims.iter()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// 처음 본 순서를 보존한 시퀀스로 평탄화합니다.
    pub fn into_vec(self) -> Vec<Claim> {
        self.claims
    }
}

impl From<Vec<Claim>> for ClaimSet {
    fn from(claims: Vec<Claim>) -> Self {
        Self::from_claims(claims)
    }
}

impl PartialEq for ClaimSet {
    fn eq(&self, other: &Self) -> bool {
        self.claims == other.claims
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_if_absent_checks_type_only() {
        let mut set = ClaimSet::from_claims(vec![Claim::new("name", "Alice")]);

        assert!(!set.insert_if_absent(Claim::new("name", "Bob")));
        assert!(set.insert_if_absent(Claim::new("username", "alice")));
        assert_eq!(set.values_of("name").collect::<Vec<_>>(), vec!["Alice"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_merge_skips_exact_duplicates_but_keeps_multi_valued_types() {
        let mut set = ClaimSet::from_claims(vec![Claim::new("sub", "1"), Claim::new("role", "user")]);

        set.merge(vec![
            Claim::new("sub", "1"),
            Claim::new("role", "user"),
            Claim::new("role", "editor"),
        ]);

        let claims = set.into_vec();
        assert_eq!(claims.len(), 3);
        assert_eq!(claims[2], Claim::new("role", "editor"));
    }

    #[test]
    fn test_from_claims_preserves_input_duplicates_and_order() {
        let set = ClaimSet::from_claims(vec![
            Claim::new("amr", "pwd"),
            Claim::new("amr", "pwd"),
            Claim::new("idp", "local"),
        ]);

        let types: Vec<_> = set.iter().map(|c| c.claim_type.as_str()).collect();
        assert_eq!(types, vec!["amr", "amr", "idp"]);
    }
}
