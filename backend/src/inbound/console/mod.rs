//! Line-oriented console adapter.
//!
//! Stands in for the login, customer and employee screens: each input line is
//! one command and each command produces one JSON reply line.
//!
//! ```text
//! login customer customer@test.com 123456
//! file 1 "Screen flickering issue"
//! logout
//! login employee employee@test.com 123456
//! claim 3
//! advance 3 "In Progress"
//! ```

mod command;
mod dto;
mod session;
mod state;

pub use command::{ConsoleCommand, ParsedLine, parse_line, usage};
pub use dto::{
    ComplaintDto, CustomerDashboardDto, EmployeeQueuesDto, MessageDto, ProductDto, Reply,
    SessionDto, UserDto,
};
pub use session::ConsoleSession;
pub use state::ConsoleState;

use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::domain::ports::{AdvanceComplaintRequest, ClaimComplaintRequest, FileComplaintRequest};
use crate::domain::{
    ComplaintId, Error, ErrorCode, LoginCredentials, ProductId, RegistrationForm, Role,
};

/// What the console should do after a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing to print (blank line or comment).
    Silent,
    /// Print the reply and keep reading.
    Reply(Reply),
    /// Print the reply and stop.
    Quit(Reply),
}

/// Console bound to one set of ports and one login session.
pub struct Console {
    state: ConsoleState,
    session: ConsoleSession,
}

impl Console {
    /// Create a logged-out console.
    pub fn new(state: ConsoleState) -> Self {
        Self {
            state,
            session: ConsoleSession::default(),
        }
    }

    /// Current login state.
    pub fn session(&self) -> ConsoleSession {
        self.session
    }

    /// Read commands until `quit` or end of input, writing one reply per line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading or writing fails. Command failures are
    /// written as replies and never end the loop.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let (reply, stop) = match self.handle_line(&line).await {
                Outcome::Silent => continue,
                Outcome::Reply(reply) => (reply, false),
                Outcome::Quit(reply) => (reply, true),
            };
            writer.write_all(reply.to_line().as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
            if stop {
                break;
            }
        }
        Ok(())
    }

    /// Parse and execute one line.
    pub async fn handle_line(&mut self, line: &str) -> Outcome {
        let command = match parse_line(line) {
            Ok(ParsedLine::Empty) => return Outcome::Silent,
            Ok(ParsedLine::Help(text)) => {
                return Outcome::Reply(Reply::success(json!({ "usage": text })));
            }
            Ok(ParsedLine::Command(command)) => command,
            Err(err) => return Outcome::Reply(Reply::failure(err)),
        };

        if command == ConsoleCommand::Quit {
            return Outcome::Quit(Reply::success(MessageDto::new("goodbye")));
        }

        let reply = Reply::from(self.execute(command).await);
        if let Some(error) = reply
            .error()
            .filter(|error| error.code() == ErrorCode::InternalError)
        {
            warn!(error = %error, "console command failed internally");
        }
        Outcome::Reply(reply)
    }

    async fn execute(&mut self, command: ConsoleCommand) -> Result<Reply, Error> {
        debug!(command = command_name(&command), "console command");
        match command {
            ConsoleCommand::Register {
                role,
                name,
                email,
                password,
                confirm,
            } => {
                let user_id = self
                    .state
                    .registration
                    .register(RegistrationForm {
                        display_name: name,
                        email,
                        password,
                        confirm_password: confirm,
                        role,
                    })
                    .await?;
                Ok(Reply::success(json!({
                    "userId": user_id.get(),
                    "message": "registration successful; please log in with your new account",
                })))
            }
            ConsoleCommand::Login {
                role,
                email,
                password,
            } => {
                let credentials = LoginCredentials::try_from_parts(&email, &password, role)
                    .map_err(|err| Error::invalid_input(err.to_string()))?;
                let user_id = self.state.login.authenticate(&credentials).await?;
                let user = self.state.profile.fetch_profile(user_id).await?;
                self.session.persist_user(user.id(), user.role());
                Ok(Reply::success(SessionDto::from(&user)))
            }
            ConsoleCommand::Logout => {
                let message = if self.session.clear() {
                    "logged out"
                } else {
                    "not logged in"
                };
                Ok(Reply::success(MessageDto::new(message)))
            }
            ConsoleCommand::Whoami => {
                let (user_id, _) = self.session.require_user()?;
                let user = self.state.profile.fetch_profile(user_id).await?;
                Ok(Reply::success(UserDto::from(&user)))
            }
            ConsoleCommand::Products => {
                let customer = self.session.require_role(Role::Customer)?;
                let products = self.state.catalogue.products_for_customer(customer).await?;
                Ok(Reply::success(dto::list::<_, ProductDto>(&products)))
            }
            ConsoleCommand::File {
                product,
                description,
            } => {
                let customer = self.session.require_role(Role::Customer)?;
                let complaint = self
                    .state
                    .complaints
                    .file(FileComplaintRequest {
                        customer,
                        product: ProductId::new(product),
                        description: ConsoleCommand::joined(&description),
                    })
                    .await?;
                Ok(Reply::success(ComplaintDto::from(&complaint)))
            }
            ConsoleCommand::Complaints => {
                let customer = self.session.require_role(Role::Customer)?;
                let complaints = self
                    .state
                    .complaints_query
                    .complaints_for_customer(customer)
                    .await?;
                Ok(Reply::success(dto::list::<_, ComplaintDto>(&complaints)))
            }
            ConsoleCommand::Dashboard => {
                let customer = self.session.require_role(Role::Customer)?;
                let dashboard = self
                    .state
                    .complaints_query
                    .customer_dashboard(customer)
                    .await?;
                Ok(Reply::success(CustomerDashboardDto::from(&dashboard)))
            }
            ConsoleCommand::Queue => {
                let employee = self.session.require_role(Role::Employee)?;
                let queues = self.state.complaints_query.employee_queues(employee).await?;
                Ok(Reply::success(EmployeeQueuesDto::from(&queues)))
            }
            ConsoleCommand::Claim { complaint } => {
                let employee = self.session.require_role(Role::Employee)?;
                let claimed = self
                    .state
                    .complaints
                    .claim(ClaimComplaintRequest {
                        complaint: ComplaintId::new(complaint),
                        employee,
                    })
                    .await?;
                Ok(Reply::success(ComplaintDto::from(&claimed)))
            }
            ConsoleCommand::Advance { complaint, status } => {
                let employee = self.session.require_role(Role::Employee)?;
                let target = ConsoleCommand::status_update(&status)?;
                let advanced = self
                    .state
                    .complaints
                    .advance(AdvanceComplaintRequest {
                        complaint: ComplaintId::new(complaint),
                        employee,
                        target,
                    })
                    .await?;
                Ok(Reply::success(ComplaintDto::from(&advanced)))
            }
            ConsoleCommand::Help => Ok(Reply::success(json!({ "usage": usage() }))),
            ConsoleCommand::Quit => Ok(Reply::success(MessageDto::new("goodbye"))),
        }
    }
}

fn command_name(command: &ConsoleCommand) -> &'static str {
    match command {
        ConsoleCommand::Register { .. } => "register",
        ConsoleCommand::Login { .. } => "login",
        ConsoleCommand::Logout => "logout",
        ConsoleCommand::Whoami => "whoami",
        ConsoleCommand::Products => "products",
        ConsoleCommand::File { .. } => "file",
        ConsoleCommand::Complaints => "complaints",
        ConsoleCommand::Dashboard => "dashboard",
        ConsoleCommand::Queue => "queue",
        ConsoleCommand::Claim { .. } => "claim",
        ConsoleCommand::Advance { .. } => "advance",
        ConsoleCommand::Help => "help",
        ConsoleCommand::Quit => "quit",
    }
}

#[cfg(test)]
mod tests;
