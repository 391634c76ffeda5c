// src/domain/inventory/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::inventory::value_objects::{MovementKind, ProductId, Sku, WarehouseId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub sku: Sku,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub sku: Sku,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    pub fn new(sku: Sku, name: impl Into<String>, created_at: DateTime<Utc>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "product name cannot be empty".into(),
            ));
        }
        Ok(Self {
            sku,
            name,
            created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewWarehouse {
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl NewWarehouse {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let code = code.into();
        let name = name.into();
        if code.trim().is_empty() || name.trim().is_empty() {
            return Err(DomainError::Validation(
                "warehouse code and name cannot be empty".into(),
            ));
        }
        Ok(Self {
            code: code.trim().to_ascii_uppercase(),
            name,
            created_at,
        })
    }
}

/// A persisted kardex row. `balance` is the stock level for the
/// product/warehouse pair after this movement was applied.
#[derive(Debug, Clone)]
pub struct KardexMovement {
    pub id: i64,
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    pub kind: MovementKind,
    pub quantity: i64,
    pub balance: i64,
    pub reference: Option<String>,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMovement {
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    pub kind: MovementKind,
    pub quantity: i64,
    pub reference: Option<String>,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl NewMovement {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_id: ProductId,
        warehouse_id: WarehouseId,
        kind: MovementKind,
        quantity: i64,
        reference: Option<String>,
        created_by: Option<UserId>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        // Adjustments carry an absolute (possibly zero) count; entries and
        // exits must move stock.
        match kind {
            MovementKind::Adjustment if quantity < 0 => {
                return Err(DomainError::Validation(
                    "adjustment quantity cannot be negative".into(),
                ));
            }
            MovementKind::Entry | MovementKind::Exit if quantity <= 0 => {
                return Err(DomainError::Validation(
                    "movement quantity must be positive".into(),
                ));
            }
            _ => {}
        }
        Ok(Self {
            product_id,
            warehouse_id,
            kind,
            quantity,
            reference,
            created_by,
            created_at,
        })
    }

    /// Balance after applying this movement to `current`. Exits may not
    /// drive the balance negative.
    pub fn apply_to(&self, current: i64) -> DomainResult<i64> {
        match self.kind {
            MovementKind::Entry => Ok(current + self.quantity),
            MovementKind::Adjustment => Ok(self.quantity),
            MovementKind::Exit => {
                let next = current - self.quantity;
                if next < 0 {
                    Err(DomainError::Validation(format!(
                        "exit of {} exceeds current balance {current}",
                        self.quantity
                    )))
                } else {
                    Ok(next)
                }
            }
        }
    }
}

/// Report row: a movement joined with product and warehouse names.
#[derive(Debug, Clone)]
pub struct KardexEntry {
    pub movement: KardexMovement,
    pub product_sku: Sku,
    pub product_name: String,
    pub warehouse_code: String,
}

/// Filter for the kardex report; all fields are optional and combined
/// with AND.
#[derive(Debug, Clone, Default)]
pub struct KardexFilter {
    pub product_id: Option<ProductId>,
    pub warehouse_id: Option<WarehouseId>,
    pub kind: Option<MovementKind>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(kind: MovementKind, quantity: i64) -> NewMovement {
        NewMovement::new(
            ProductId::new(1).unwrap(),
            WarehouseId::new(1).unwrap(),
            kind,
            quantity,
            None,
            None,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn entry_adds_and_exit_subtracts() {
        assert_eq!(movement(MovementKind::Entry, 5).apply_to(10).unwrap(), 15);
        assert_eq!(movement(MovementKind::Exit, 4).apply_to(10).unwrap(), 6);
    }

    #[test]
    fn adjustment_sets_absolute_balance() {
        assert_eq!(movement(MovementKind::Adjustment, 3).apply_to(99).unwrap(), 3);
        assert_eq!(movement(MovementKind::Adjustment, 0).apply_to(7).unwrap(), 0);
    }

    #[test]
    fn exit_cannot_underflow() {
        assert!(movement(MovementKind::Exit, 11).apply_to(10).is_err());
    }

    #[test]
    fn zero_quantity_entry_is_rejected() {
        assert!(
            NewMovement::new(
                ProductId::new(1).unwrap(),
                WarehouseId::new(1).unwrap(),
                MovementKind::Entry,
                0,
                None,
                None,
                Utc::now(),
            )
            .is_err()
        );
    }
}
