//! The get/add/update/delete commands.
//!
//! Server-side outcomes (unexpected statuses, and 404 on update/delete) are
//! printed and the command still succeeds. Transport, input and decoding failures abort the
//! command with a `CliError`.

use std::io::{BufRead, Write};

use item_core::{ApiError, ItemClient, NewItem};

use crate::console::Console;
use crate::error::CliError;
use crate::transport::Transport;

pub struct Session<T, R, W> {
    client: ItemClient,
    transport: T,
    console: Console<R, W>,
}

impl<T, R, W> Session<T, R, W>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    pub fn new(client: ItemClient, transport: T, console: Console<R, W>) -> Self {
        Self {
            client,
            transport,
            console,
        }
    }

    pub fn get_items(&mut self) -> Result<(), CliError> {
        let response = self.transport.send(self.client.build_list_items())?;
        let items = self.client.parse_list_items(response)?;

        self.console.println("Items:")?;
        for item in &items {
            self.console.println(item)?;
        }
        Ok(())
    }

    pub fn add_item(&mut self) -> Result<(), CliError> {
        let input = NewItem {
            name: self.console.prompt("Enter item name")?,
            description: self.console.prompt("Enter item description")?,
            price: self.console.prompt_integer("Enter item price")?,
        };

        let response = self.transport.send(self.client.build_create_item(&input)?)?;
        match self.client.parse_create_item(response) {
            Ok(item) => self.console.println(format_args!("Item added: {item}")),
            Err(e) => self.report_failure("add", e),
        }
    }

    pub fn update_item(&mut self) -> Result<(), CliError> {
        let id = self.console.prompt_integer("Enter item ID to update")?;
        let input = NewItem {
            name: self.console.prompt("Enter new item name")?,
            description: self.console.prompt("Enter new item description")?,
            price: self.console.prompt_integer("Enter new item price")?,
        };

        let response = self.transport.send(self.client.build_update_item(id, &input)?)?;
        match self.client.parse_update_item(response) {
            Ok(reply) => self.console.println(reply.message),
            Err(ApiError::NotFound) => self.console.println("Item not found"),
            Err(e) => self.report_failure("update", e),
        }
    }

    pub fn delete_item(&mut self) -> Result<(), CliError> {
        let id = self.console.prompt_integer("Enter item ID to delete")?;

        let response = self.transport.send(self.client.build_delete_item(id))?;
        match self.client.parse_delete_item(response) {
            Ok(reply) => self.console.println(reply.message),
            Err(ApiError::NotFound) => self.console.println("Item not found"),
            Err(e) => self.report_failure("delete", e),
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Print status-bearing API errors; pass anything else up.
    fn report_failure(&mut self, verb: &str, err: ApiError) -> Result<(), CliError> {
        match err.status() {
            Some(status) => {
                tracing::debug!(error = %err, "server rejected request");
                self.console
                    .println(format_args!("Failed to {verb} item. Status Code: {status}"))
            }
            None => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use item_core::{HttpMethod, HttpRequest, HttpResponse};

    use super::*;

    /// Replays canned responses and records every request it was given.
    #[derive(Default)]
    struct Scripted {
        responses: RefCell<VecDeque<Result<HttpResponse, CliError>>>,
        sent: RefCell<Vec<HttpRequest>>,
    }

    impl Scripted {
        fn replying(status: u16, body: &str) -> Self {
            let scripted = Self::default();
            scripted
                .responses
                .borrow_mut()
                .push_back(Ok(HttpResponse::new(status, body)));
            scripted
        }

        fn failing(message: &str) -> Self {
            let scripted = Self::default();
            scripted
                .responses
                .borrow_mut()
                .push_back(Err(CliError::Transport(message.to_string())));
            scripted
        }
    }

    impl Transport for &Scripted {
        fn send(&self, request: HttpRequest) -> Result<HttpResponse, CliError> {
            self.sent.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(CliError::Transport("no scripted response".into())))
        }
    }

    fn session<'a>(
        transport: &'a Scripted,
        input: &'a str,
    ) -> Session<&'a Scripted, &'a [u8], Vec<u8>> {
        Session::new(
            ItemClient::new("http://localhost:8080"),
            transport,
            Console::new(input.as_bytes(), Vec::new()),
        )
    }

    fn output<T: Transport>(session: Session<T, &[u8], Vec<u8>>) -> String {
        String::from_utf8(session.into_console().into_output()).unwrap()
    }

    #[test]
    fn get_prints_each_item() {
        let transport = Scripted::replying(
            200,
            r#"[{"item_id":1,"name":"Widget","description":"A widget","price":10},
                {"item_id":2,"name":"Gadget","description":"","price":25}]"#,
        );
        let mut s = session(&transport, "");
        s.get_items().unwrap();

        assert_eq!(
            output(s),
            "Items:\nID: 1, Name: Widget, Price: 10\nID: 2, Name: Gadget, Price: 25\n"
        );
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].path, "http://localhost:8080/items");
    }

    #[test]
    fn get_surfaces_transport_errors() {
        let transport = Scripted::failing("connection refused");
        let mut s = session(&transport, "");
        let err = s.get_items().unwrap_err();

        assert!(matches!(err, CliError::Transport(ref m) if m == "connection refused"));
        assert_eq!(output(s), "");
    }

    #[test]
    fn add_prompts_then_posts() {
        let transport = Scripted::replying(
            200,
            r#"{"item_id":1,"name":"Widget","description":"A widget","price":10}"#,
        );
        let mut s = session(&transport, "Widget\nA widget\n10\n");
        s.add_item().unwrap();

        assert_eq!(
            output(s),
            "Enter item name: Enter item description: Enter item price: \
             Item added: ID: 1, Name: Widget, Price: 10\n"
        );
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, HttpMethod::Post);
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Widget", "description": "A widget", "price": 10})
        );
    }

    #[test]
    fn add_with_bad_price_sends_nothing() {
        let transport = Scripted::default();
        let mut s = session(&transport, "Widget\nA widget\nten\n");
        let err = s.add_item().unwrap_err();

        assert!(matches!(err, CliError::InvalidNumber { .. }));
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn add_reports_rejected_status() {
        let transport = Scripted::replying(400, r#"{"error":"bad request"}"#);
        let mut s = session(&transport, "Widget\nA widget\n10\n");
        s.add_item().unwrap();

        assert!(output(s).ends_with("Failed to add item. Status Code: 400\n"));
    }

    #[test]
    fn add_reports_not_found_as_a_plain_status() {
        let transport = Scripted::replying(404, "");
        let mut s = session(&transport, "Widget\nA widget\n10\n");
        s.add_item().unwrap();

        let out = output(s);
        assert!(out.ends_with("Failed to add item. Status Code: 404\n"), "{out}");
        assert!(!out.contains("Item not found"));
    }

    #[test]
    fn update_prints_server_message() {
        let transport = Scripted::replying(200, r#"{"message":"Item updated successfully"}"#);
        let mut s = session(&transport, "1\nWidget2\n\n20\n");
        s.update_item().unwrap();

        assert!(output(s).ends_with("Item updated successfully\n"));
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, HttpMethod::Put);
        assert_eq!(sent[0].path, "http://localhost:8080/items/1");
    }

    #[test]
    fn update_missing_item() {
        let transport = Scripted::replying(404, r#"{"error":"not found"}"#);
        let mut s = session(&transport, "9\nx\ny\n1\n");
        s.update_item().unwrap();

        assert!(output(s).ends_with("Item not found\n"));
    }

    #[test]
    fn delete_prints_server_message() {
        let transport = Scripted::replying(200, r#"{"message":"Item deleted successfully"}"#);
        let mut s = session(&transport, "3\n");
        s.delete_item().unwrap();

        assert_eq!(
            output(s),
            "Enter item ID to delete: Item deleted successfully\n"
        );
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, HttpMethod::Delete);
        assert_eq!(sent[0].path, "http://localhost:8080/items/3");
    }

    #[test]
    fn delete_missing_item() {
        let transport = Scripted::replying(404, "");
        let mut s = session(&transport, "999\n");
        s.delete_item().unwrap();

        assert!(output(s).ends_with("Item not found\n"));
    }

    #[test]
    fn delete_other_status() {
        let transport = Scripted::replying(500, "");
        let mut s = session(&transport, "1\n");
        s.delete_item().unwrap();

        assert!(output(s).ends_with("Failed to delete item. Status Code: 500\n"));
    }

    #[test]
    fn malformed_success_body_is_an_error() {
        let transport = Scripted::replying(200, "not json");
        let mut s = session(&transport, "1\n");
        let err = s.delete_item().unwrap_err();

        assert!(matches!(
            err,
            CliError::Api(ApiError::DeserializationError(_))
        ));
    }
}
