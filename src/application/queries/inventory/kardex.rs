use super::InventoryQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CursorPage, KardexEntryDto},
        error::{ApplicationError, ApplicationResult},
        queries::normalize_limit,
    },
    domain::inventory::{KardexCursor, KardexFilter, MovementKind, ProductId, WarehouseId},
};
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct KardexReportQuery {
    pub product_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub kind: Option<MovementKind>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl InventoryQueryService {
    /// The kardex report: movements newest first, joined with product and
    /// warehouse reference data, filtered and keyset-paginated.
    pub async fn kardex_report(
        &self,
        actor: &AuthenticatedUser,
        query: KardexReportQuery,
    ) -> ApplicationResult<CursorPage<KardexEntryDto>> {
        self.ensure_can_read(actor)?;

        if let (Some(from), Some(to)) = (query.from, query.to)
            && from > to
        {
            return Err(ApplicationError::validation(
                "date range start is after its end",
            ));
        }

        let filter = KardexFilter {
            product_id: query.product_id.map(ProductId::new).transpose()?,
            warehouse_id: query.warehouse_id.map(WarehouseId::new).transpose()?,
            kind: query.kind,
            from: query.from,
            to: query.to,
        };

        let limit = normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(KardexCursor::decode)
            .transpose()?;

        let (entries, next) = self.kardex_repo.list_page(&filter, limit, cursor).await?;
        let items = entries.into_iter().map(KardexEntryDto::from).collect();
        Ok(CursorPage::new(items, next.map(|c| c.encode())))
    }

    pub async fn stock_balance(
        &self,
        actor: &AuthenticatedUser,
        product_id: i64,
        warehouse_id: i64,
    ) -> ApplicationResult<i64> {
        self.ensure_can_read(actor)?;
        let product_id = ProductId::new(product_id)?;
        let warehouse_id = WarehouseId::new(warehouse_id)?;
        Ok(self.kardex_repo.balance(product_id, warehouse_id).await?)
    }
}
