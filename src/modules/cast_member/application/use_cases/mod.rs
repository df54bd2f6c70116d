pub mod change_cast_member_status;
pub mod create_cast_member;
pub mod delete_cast_member;
pub mod get_cast_member;
pub mod list_cast_members;
pub mod update_cast_member;

pub use change_cast_member_status::{
    ChangeCastMemberStatusCommand, ChangeCastMemberStatusHandler, ChangeCastMemberStatusResult,
};
pub use create_cast_member::{
    CreateCastMemberCommand, CreateCastMemberHandler, CreateCastMemberResult,
};
pub use delete_cast_member::{DeleteCastMemberCommand, DeleteCastMemberHandler};
pub use get_cast_member::{CastMemberOutput, GetCastMemberByIdHandler, GetCastMemberByIdQuery};
pub use list_cast_members::{CastMemberListOutput, ListCastMembersHandler, ListCastMembersQuery};
pub use update_cast_member::{
    UpdateCastMemberCommand, UpdateCastMemberHandler, UpdateCastMemberResult,
};
