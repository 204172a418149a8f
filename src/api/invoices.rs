use log::info;

use super::endpoints::{CREATE_INVOICE, DELETE_INVOICE, GET_INVOICE, GET_INVOICES};
use super::{RocketClient, page_query};
use crate::http::ClientError;
use crate::models::{Invoice, NewInvoice, Page};

impl RocketClient {
    pub async fn create_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, ClientError> {
        info!(
            currency = invoice.currency.as_str(),
            num_payments = invoice.num_payments;
            "Creating invoice"
        );
        self.send(&CREATE_INVOICE, CREATE_INVOICE.path, invoice)
            .await?
            .into_data()
    }

    pub async fn get_invoices(&self, limit: u32, offset: u32) -> Result<Page<Invoice>, ClientError> {
        self.get_with_query(&GET_INVOICES, page_query(limit, offset))
            .await?
            .into_data()
    }

    pub async fn get_invoice(&self, invoice_id: u64) -> Result<Invoice, ClientError> {
        let path = GET_INVOICE.resolve(invoice_id);
        self.call(&GET_INVOICE, &path, GET_INVOICE.options())
            .await?
            .into_data()
    }

    pub async fn delete_invoice(&self, invoice_id: u64) -> Result<bool, ClientError> {
        let path = DELETE_INVOICE.resolve(invoice_id);
        let envelope = self.call(&DELETE_INVOICE, &path, DELETE_INVOICE.options()).await?;
        info!(invoice_id = invoice_id; "Invoice deleted");
        Ok(envelope.is_success())
    }
}
