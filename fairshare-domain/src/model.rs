use std::{
    borrow::Borrow,
    collections::BTreeMap,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    sync::Arc,
};

/// Identifier of a participant, unique within a group.
///
/// Ordering is plain string ordering; every deterministic tie-break in the
/// engine relies on it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(Arc<str>);

impl ParticipantId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ParticipantId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Signed amount in minor currency units (e.g. cents).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    /// `None` for `i64::MIN`, which has no positive counterpart.
    pub fn checked_abs(self) -> Option<Self> {
        self.0.checked_abs().map(Self)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Every beneficiary owes `amount / n`; the remainder goes one minor unit
    /// at a time to the lowest beneficiary ids.
    #[default]
    Equal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedExpense {
    pub id: String,
    pub amount: Money,
    pub payer: ParticipantId,
    pub beneficiaries: Vec<ParticipantId>,
    pub split: SplitPolicy,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl SharedExpense {
    /// Equal-split expense without category or description.
    pub fn equal<I, P>(
        id: impl Into<String>,
        amount: Money,
        payer: impl Into<ParticipantId>,
        beneficiaries: I,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ParticipantId>,
    {
        Self {
            id: id.into(),
            amount,
            payer: payer.into(),
            beneficiaries: beneficiaries.into_iter().map(Into::into).collect(),
            split: SplitPolicy::Equal,
            category: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Net position per participant: positive is owed money, negative owes money.
pub type Balances = BTreeMap<ParticipantId, Money>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub balances: Balances,
    pub transfers: Vec<Transfer>,
}

impl Settlement {
    /// Balances left over after every transfer has been paid.
    ///
    /// All zero for any settlement produced by the resolver.
    pub fn residual_balances(&self) -> Balances {
        let mut residual = self.balances.clone();
        for transfer in &self.transfers {
            if let Some(balance) = residual.get_mut(&transfer.from) {
                *balance += transfer.amount;
            }
            if let Some(balance) = residual.get_mut(&transfer.to) {
                *balance -= transfer.amount;
            }
        }
        residual
    }

    pub fn total_transferred(&self) -> Money {
        self.transfers.iter().map(|transfer| transfer.amount).sum()
    }
}
