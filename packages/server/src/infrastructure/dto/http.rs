//! HTTP API response DTOs for the chat room.

use serde::{Deserialize, Serialize};

use crate::room::MemberInfo;

/// Room membership for the debug endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStateDto {
    pub member_count: usize,
    pub members: Vec<MemberDto>,
}

/// One admitted client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDto {
    pub client_id: String,
    pub name: String,
    pub joined_at: String, // ISO 8601
}

impl From<&MemberInfo> for MemberDto {
    fn from(member: &MemberInfo) -> Self {
        Self {
            client_id: member.client_id.to_string(),
            name: member.identity.as_str().to_string(),
            joined_at: member.joined_at.to_rfc3339(),
        }
    }
}

impl From<&[MemberInfo]> for RoomStateDto {
    fn from(members: &[MemberInfo]) -> Self {
        Self {
            member_count: members.len(),
            members: members.iter().map(MemberDto::from).collect(),
        }
    }
}
