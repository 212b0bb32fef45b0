//! Rooms command - rooms and occupancy calendar.

use super::output::{calendar_line, emit, lines, room_line};
use super::CommandContext;
use crate::cli::args::{RoomsAction, RoomsArgs};
use crate::domain::{RoomCreate, RoomUpdate};
use crate::errors::AppResult;
use crate::types::PageParams;

/// Execute the rooms command
pub async fn execute(args: RoomsArgs, ctx: &CommandContext) -> AppResult<()> {
    let rooms = ctx.services.rooms();

    match args.action {
        RoomsAction::List(page) => {
            let found = rooms.list(PageParams::new(page.skip, page.limit)).await?;
            emit(ctx, &found, |r| lines(r, room_line))
        }
        RoomsAction::Get { id } => {
            let room = rooms.get(id).await?;
            emit(ctx, &room, room_line)
        }
        RoomsAction::Create(fields) => {
            let room = rooms
                .create(RoomCreate {
                    number: fields.number,
                    kind: fields.kind,
                    status: fields.status,
                    capacity: fields.capacity,
                    daily_rate: fields.rate,
                    description: fields.description,
                })
                .await?;
            ctx.notifier
                .success("Room created", Some(&format!("#{} number {}", room.id, room.number)));
            Ok(())
        }
        RoomsAction::Update { id, fields } => {
            let room = rooms
                .update(
                    id,
                    RoomUpdate {
                        number: fields.number,
                        kind: fields.kind,
                        status: fields.status,
                        capacity: fields.capacity,
                        daily_rate: fields.rate,
                        description: fields.description,
                    },
                )
                .await?;
            ctx.notifier
                .success("Room updated", Some(&format!("#{} number {}", room.id, room.number)));
            Ok(())
        }
        RoomsAction::Delete { id, yes } => {
            if !ctx.confirmed(yes, &format!("Delete room #{}?", id)) {
                return Ok(());
            }
            rooms.delete(id).await?;
            ctx.notifier.success("Room deleted", Some(&format!("#{}", id)));
            Ok(())
        }
        RoomsAction::Calendar { from, to } => {
            let calendar = rooms.calendar(from, to).await?;
            emit(ctx, &calendar, |c| lines(c, calendar_line))
        }
    }
}
