use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_CLIENT_DOCUMENT: &str = "clients_document_number_key";
const CNT_PRODUCT_SKU: &str = "products_sku_key";
const CNT_WAREHOUSE_CODE: &str = "warehouses_code_key";
const CNT_MOVEMENT_PRODUCT: &str = "kardex_movements_product_id_fkey";
const CNT_MOVEMENT_WAREHOUSE: &str = "kardex_movements_warehouse_id_fkey";
const CNT_MOVEMENT_BALANCE_CHECK: &str = "kardex_movements_balance_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_CLIENT_DOCUMENT => {
                        DomainError::Conflict("document number already exists".into())
                    }
                    CNT_PRODUCT_SKU => DomainError::Conflict("sku already exists".into()),
                    CNT_WAREHOUSE_CODE => {
                        DomainError::Conflict("warehouse code already exists".into())
                    }
                    CNT_MOVEMENT_PRODUCT => DomainError::NotFound("product not found".into()),
                    CNT_MOVEMENT_WAREHOUSE => DomainError::NotFound("warehouse not found".into()),
                    CNT_MOVEMENT_BALANCE_CHECK => {
                        DomainError::Validation("movement would drive stock negative".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
