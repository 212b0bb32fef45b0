//! Reservations command - bookings.

use super::output::{emit, lines, reservation_line};
use super::CommandContext;
use crate::cli::args::{ReservationsAction, ReservationsArgs};
use crate::domain::{ReservationCreate, ReservationFilter, ReservationUpdate};
use crate::errors::AppResult;
use crate::types::PageParams;

/// Execute the reservations command
pub async fn execute(args: ReservationsArgs, ctx: &CommandContext) -> AppResult<()> {
    let reservations = ctx.services.reservations();

    match args.action {
        ReservationsAction::List {
            page,
            status,
            month,
        } => {
            let filter = ReservationFilter {
                page: PageParams::new(page.skip, page.limit),
                status,
                month,
            };
            let found = reservations.list(filter).await?;
            emit(ctx, &found, |r| lines(r, reservation_line))
        }
        ReservationsAction::Get { id } => {
            let reservation = reservations.get(id).await?;
            emit(ctx, &reservation, reservation_line)
        }
        ReservationsAction::Create {
            room,
            client,
            check_in,
            check_out,
        } => {
            let reservation = reservations
                .create(ReservationCreate {
                    room_id: room,
                    client_id: client,
                    check_in,
                    check_out,
                })
                .await?;
            ctx.notifier.success(
                "Reservation created",
                Some(&format!(
                    "#{} total {:.2} ({})",
                    reservation.id, reservation.total, reservation.status
                )),
            );
            Ok(())
        }
        ReservationsAction::Update {
            id,
            check_in,
            check_out,
            status,
        } => {
            let reservation = reservations
                .update(
                    id,
                    ReservationUpdate {
                        check_in,
                        check_out,
                        status,
                    },
                )
                .await?;
            ctx.notifier.success(
                "Reservation updated",
                Some(&format!("#{} ({})", reservation.id, reservation.status)),
            );
            Ok(())
        }
        ReservationsAction::Delete { id, yes } => {
            if !ctx.confirmed(yes, &format!("Delete reservation #{}?", id)) {
                return Ok(());
            }
            let deleted = reservations.delete(id).await?;
            ctx.notifier.success(
                "Reservation deleted",
                Some(&format!(
                    "#{} room {} {} -> {}",
                    deleted.id, deleted.room_id, deleted.check_in, deleted.check_out
                )),
            );
            Ok(())
        }
    }
}
