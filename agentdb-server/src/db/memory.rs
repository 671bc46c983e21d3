//! In-memory implementation of [`Store`] for router tests.
//!
//! Mirrors the reference schema: serial ids per table, NOT NULL foreign keys
//! that must reference an existing parent, `ON DELETE CASCADE` children and
//! strictly increasing server-side timestamps.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::{resource, DbError, Store, StoreResult};
use crate::models::{
    Agent, AgentTool, AgentToolUpdate, AgentUpdate, Conversation, Message, NewAgent,
    NewAgentTool, NewConversation, NewMessage, Stats,
};

#[derive(Debug, Default)]
struct Tables {
    agents: Vec<Agent>,
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
    agent_tools: Vec<AgentTool>,
    serials: [i32; 4],
    last_tick: Option<DateTime<Utc>>,
}

enum Table {
    Agents = 0,
    Conversations = 1,
    Messages = 2,
    AgentTools = 3,
}

impl Tables {
    fn next_id(&mut self, table: Table) -> i32 {
        let serial = &mut self.serials[table as usize];
        *serial += 1;
        *serial
    }

    fn now(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let tick = match self.last_tick {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_tick = Some(tick);
        tick
    }

    fn require_agent(&self, agent_id: Option<i32>, table: &str) -> StoreResult<i32> {
        let agent_id = agent_id.ok_or_else(|| not_null(table, "agent_id"))?;
        if self.agents.iter().any(|a| a.id == agent_id) {
            Ok(agent_id)
        } else {
            Err(foreign_key(table, "agent_id"))
        }
    }

    fn remove_conversations_of(&mut self, agent_id: i32) {
        let doomed: Vec<i32> = self
            .conversations
            .iter()
            .filter(|c| c.agent_id == Some(agent_id))
            .map(|c| c.id)
            .collect();
        self.conversations.retain(|c| c.agent_id != Some(agent_id));
        self.messages
            .retain(|m| !m.conversation_id.is_some_and(|id| doomed.contains(&id)));
    }
}

fn not_null(table: &str, column: &str) -> DbError {
    DbError::Backend(format!(
        "null value in column \"{column}\" of relation \"{table}\" violates not-null constraint"
    ))
}

fn foreign_key(table: &str, column: &str) -> DbError {
    DbError::Backend(format!(
        "insert or update on table \"{table}\" violates foreign key constraint on \"{column}\""
    ))
}

/// Newest first, the way the list endpoints order rows.
fn newest_first<T>(rows: impl DoubleEndedIterator<Item = T>) -> Vec<T> {
    rows.rev().collect()
}

/// Thread-safe in-memory store. Test builds only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    fn tables(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| DbError::Backend("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<DateTime<Utc>> {
        Ok(self.tables()?.now())
    }

    async fn list_agents(&self) -> StoreResult<Vec<Agent>> {
        Ok(newest_first(self.tables()?.agents.iter().cloned()))
    }

    async fn get_agent(&self, id: i32) -> StoreResult<Agent> {
        self.tables()?
            .agents
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found(resource::AGENT, id))
    }

    async fn create_agent(&self, agent: NewAgent) -> StoreResult<Agent> {
        let mut tables = self.tables()?;
        let now = tables.now();
        let row = Agent {
            id: tables.next_id(Table::Agents),
            name: agent.name,
            description: agent.description,
            capabilities: Some(agent.capabilities),
            status: Some(agent.status),
            created_at: now,
            updated_at: now,
        };
        tables.agents.push(row.clone());
        Ok(row)
    }

    async fn update_agent(&self, id: i32, update: AgentUpdate) -> StoreResult<Agent> {
        let mut tables = self.tables()?;
        let now = tables.now();
        let agent = tables
            .agents
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DbError::not_found(resource::AGENT, id))?;

        agent.name = update.name;
        agent.description = update.description;
        agent.capabilities = update.capabilities;
        agent.status = update.status;
        agent.updated_at = now;
        Ok(agent.clone())
    }

    async fn delete_agent(&self, id: i32) -> StoreResult<i32> {
        let mut tables = self.tables()?;
        let before = tables.agents.len();
        tables.agents.retain(|a| a.id != id);
        if tables.agents.len() == before {
            return Err(DbError::not_found(resource::AGENT, id));
        }

        tables.remove_conversations_of(id);
        tables.agent_tools.retain(|t| t.agent_id != Some(id));
        Ok(id)
    }

    async fn list_conversations(&self) -> StoreResult<Vec<Conversation>> {
        Ok(newest_first(self.tables()?.conversations.iter().cloned()))
    }

    async fn list_agent_conversations(&self, agent_id: i32) -> StoreResult<Vec<Conversation>> {
        let tables = self.tables()?;
        Ok(newest_first(
            tables
                .conversations
                .iter()
                .filter(|c| c.agent_id == Some(agent_id))
                .cloned(),
        ))
    }

    async fn create_conversation(
        &self,
        conversation: NewConversation,
    ) -> StoreResult<Conversation> {
        let mut tables = self.tables()?;
        let agent_id = tables.require_agent(conversation.agent_id, "conversations")?;
        let now = tables.now();
        let row = Conversation {
            id: tables.next_id(Table::Conversations),
            agent_id: Some(agent_id),
            title: conversation.title,
            context: Some(conversation.context),
            created_at: now,
            updated_at: now,
        };
        tables.conversations.push(row.clone());
        Ok(row)
    }

    async fn list_messages(&self, conversation_id: i32) -> StoreResult<Vec<Message>> {
        let tables = self.tables()?;
        Ok(tables
            .messages
            .iter()
            .filter(|m| m.conversation_id == Some(conversation_id))
            .cloned()
            .collect())
    }

    async fn create_message(&self, message: NewMessage) -> StoreResult<Message> {
        let mut tables = self.tables()?;
        let conversation_id = message
            .conversation_id
            .ok_or_else(|| not_null("messages", "conversation_id"))?;
        if !tables.conversations.iter().any(|c| c.id == conversation_id) {
            return Err(foreign_key("messages", "conversation_id"));
        }

        let now = tables.now();
        let row = Message {
            id: tables.next_id(Table::Messages),
            conversation_id: Some(conversation_id),
            sender_type: message.sender_type,
            content: message.content,
            metadata: Some(message.metadata),
            created_at: now,
        };
        tables.messages.push(row.clone());
        Ok(row)
    }

    async fn list_agent_tools(&self) -> StoreResult<Vec<AgentTool>> {
        Ok(newest_first(self.tables()?.agent_tools.iter().cloned()))
    }

    async fn list_tools_for_agent(&self, agent_id: i32) -> StoreResult<Vec<AgentTool>> {
        let tables = self.tables()?;
        Ok(newest_first(
            tables
                .agent_tools
                .iter()
                .filter(|t| t.agent_id == Some(agent_id))
                .cloned(),
        ))
    }

    async fn create_agent_tool(&self, tool: NewAgentTool) -> StoreResult<AgentTool> {
        let mut tables = self.tables()?;
        let agent_id = tables.require_agent(tool.agent_id, "agent_tools")?;
        let now = tables.now();
        let row = AgentTool {
            id: tables.next_id(Table::AgentTools),
            agent_id: Some(agent_id),
            tool_name: tool.tool_name,
            tool_config: Some(tool.tool_config),
            enabled: Some(tool.enabled),
            created_at: now,
            updated_at: now,
        };
        tables.agent_tools.push(row.clone());
        Ok(row)
    }

    async fn update_agent_tool(
        &self,
        id: i32,
        update: AgentToolUpdate,
    ) -> StoreResult<AgentTool> {
        let mut tables = self.tables()?;
        let now = tables.now();
        let tool = tables
            .agent_tools
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DbError::not_found(resource::AGENT_TOOL, id))?;

        tool.tool_config = update.tool_config;
        tool.enabled = update.enabled;
        tool.updated_at = now;
        Ok(tool.clone())
    }

    async fn delete_agent_tool(&self, id: i32) -> StoreResult<i32> {
        let mut tables = self.tables()?;
        let before = tables.agent_tools.len();
        tables.agent_tools.retain(|t| t.id != id);
        if tables.agent_tools.len() == before {
            return Err(DbError::not_found(resource::AGENT_TOOL, id));
        }
        Ok(id)
    }

    async fn stats(&self) -> StoreResult<Stats> {
        let tables = self.tables()?;
        Ok(Stats {
            agents: tables.agents.len() as i64,
            conversations: tables.conversations.len() as i64,
            messages: tables.messages.len() as i64,
            tools: tables.agent_tools.len() as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_agent(name: &str) -> NewAgent {
        NewAgent {
            name: Some(name.into()),
            description: None,
            capabilities: json!({}),
            status: "inactive".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_serial_per_table() {
        let store = MemoryStore::default();
        let a = store.create_agent(new_agent("a")).await.unwrap();
        let b = store.create_agent(new_agent("b")).await.unwrap();
        let conversation = store
            .create_conversation(NewConversation {
                agent_id: Some(a.id),
                title: None,
                context: json!({}),
            })
            .await
            .unwrap();

        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(conversation.id, 1);
        assert!(b.created_at > a.created_at);
    }

    #[tokio::test]
    async fn deleting_an_agent_cascades() {
        let store = MemoryStore::default();
        let agent = store.create_agent(new_agent("a")).await.unwrap();
        let conversation = store
            .create_conversation(NewConversation {
                agent_id: Some(agent.id),
                title: Some("t".into()),
                context: json!({}),
            })
            .await
            .unwrap();
        store
            .create_message(NewMessage {
                conversation_id: Some(conversation.id),
                sender_type: Some("user".into()),
                content: Some("hi".into()),
                metadata: json!({}),
            })
            .await
            .unwrap();

        store.delete_agent(agent.id).await.unwrap();

        assert_eq!(store.stats().await.unwrap(), Stats::default());
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let store = MemoryStore::default();
        let err = store
            .create_agent_tool(NewAgentTool {
                agent_id: Some(404),
                tool_name: None,
                tool_config: json!({}),
                enabled: true,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::Backend(_)));
    }
}
