use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::{AppError, Result};
use crate::domain::repositories::{
    PlayerRepository, TeamCache, TeamRepository, TransferRepository,
};
use crate::domain::transfer::{Transfer, TransferListItem, TransferStatus};
use crate::services::appreciation::{appreciate, AppreciationRng};

/// Transfer market workflows: listing, querying, and purchasing.
///
/// The purchase sequence persists each step independently; there is no
/// cross-step transaction. A storage failure mid-sequence aborts without
/// compensating earlier writes, and concurrent purchases of one transfer are
/// resolved by the conditional completion update (the loser observes zero
/// rows affected and gets `TransferNotActive`).
pub struct TransferService {
    transfers: Arc<dyn TransferRepository>,
    players: Arc<dyn PlayerRepository>,
    teams: Arc<dyn TeamRepository>,
    cache: Arc<dyn TeamCache>,
    rng: Arc<dyn AppreciationRng>,
}

impl TransferService {
    pub fn new(
        transfers: Arc<dyn TransferRepository>,
        players: Arc<dyn PlayerRepository>,
        teams: Arc<dyn TeamRepository>,
        cache: Arc<dyn TeamCache>,
        rng: Arc<dyn AppreciationRng>,
    ) -> Self {
        Self {
            transfers,
            players,
            teams,
            cache,
            rng,
        }
    }

    /// Lists one of the acting user's players on the transfer market.
    pub async fn list_player(
        &self,
        user_id: Uuid,
        player_id: Uuid,
        asking_price: i64,
    ) -> Result<Transfer> {
        tracing::info!(%user_id, %player_id, asking_price, "listing player for transfer");

        let player = self.players.get_by_id(player_id).await.map_err(|err| {
            tracing::error!(%player_id, error = %err, "failed to get player");
            err
        })?;

        let team = self.teams.get_by_user_id(user_id).await.map_err(|err| {
            tracing::error!(%user_id, error = %err, "failed to get team");
            err
        })?;

        if player.team_id != team.id {
            tracing::warn!(
                player_team_id = %player.team_id,
                user_team_id = %team.id,
                "player does not belong to user's team"
            );
            return Err(AppError::Forbidden);
        }

        if let Ok(Some(existing)) = self.transfers.get_active_by_player_id(player_id).await {
            tracing::warn!(transfer_id = %existing.id, "player already listed for transfer");
            return Err(AppError::PlayerAlreadyListed);
        }

        let transfer = self
            .transfers
            .create(player_id, team.id, asking_price)
            .await
            .map_err(|err| {
                tracing::error!(%player_id, error = %err, "failed to create transfer");
                err
            })?;

        tracing::info!(transfer_id = %transfer.id, "player listed for transfer");

        Ok(transfer)
    }

    /// All active transfers with their player and seller team resolved,
    /// newest first.
    ///
    /// A transfer whose player or seller team fails to resolve is dropped
    /// from the result rather than failing the whole query; a degraded
    /// partial listing is more useful to callers than an error for one bad
    /// row.
    pub async fn get_transfer_list(&self) -> Result<Vec<TransferListItem>> {
        tracing::info!("getting transfer list");

        let transfers = self.transfers.get_active().await.map_err(|err| {
            tracing::error!(error = %err, "failed to get active transfers");
            err
        })?;

        let mut items = Vec::with_capacity(transfers.len());

        for transfer in transfers {
            let player = match self.players.get_by_id(transfer.player_id).await {
                Ok(player) => player,
                Err(err) => {
                    tracing::warn!(
                        player_id = %transfer.player_id,
                        error = %err,
                        "failed to get player for transfer"
                    );
                    continue;
                }
            };

            let seller_team = match self.teams.get_by_id(transfer.seller_team_id).await {
                Ok(team) => team,
                Err(err) => {
                    tracing::warn!(
                        team_id = %transfer.seller_team_id,
                        error = %err,
                        "failed to get team for transfer"
                    );
                    continue;
                }
            };

            items.push(TransferListItem {
                transfer,
                player,
                seller_team,
            });
        }

        Ok(items)
    }

    /// Executes a purchase of an active transfer by the acting user's team.
    ///
    /// On success the player changes hands, their market value appreciates by
    /// a drawn percentage in [10, 100], the asking price moves from buyer to
    /// seller budget, and the transfer becomes `completed`.
    pub async fn buy_player(&self, user_id: Uuid, transfer_id: Uuid) -> Result<()> {
        tracing::info!(%user_id, %transfer_id, "buying player");

        let transfer = self.transfers.get_by_id(transfer_id).await.map_err(|err| {
            tracing::error!(%transfer_id, error = %err, "failed to get transfer");
            err
        })?;

        if transfer.status != TransferStatus::Active {
            tracing::warn!(status = %transfer.status, "transfer is not active");
            return Err(AppError::TransferNotActive);
        }

        let buyer_team = self.teams.get_by_user_id(user_id).await.map_err(|err| {
            tracing::error!(%user_id, error = %err, "failed to get buyer team");
            err
        })?;

        if transfer.seller_team_id == buyer_team.id {
            tracing::warn!("cannot buy own player");
            return Err(AppError::CannotBuyOwnPlayer);
        }

        if buyer_team.budget < transfer.asking_price {
            tracing::warn!(
                budget = buyer_team.budget,
                asking_price = transfer.asking_price,
                "insufficient funds"
            );
            return Err(AppError::InsufficientFunds);
        }

        let seller_team = self
            .teams
            .get_by_id(transfer.seller_team_id)
            .await
            .map_err(|err| {
                tracing::error!(team_id = %transfer.seller_team_id, error = %err, "failed to get seller team");
                err
            })?;

        let player = self.players.get_by_id(transfer.player_id).await.map_err(|err| {
            tracing::error!(player_id = %transfer.player_id, error = %err, "failed to get player");
            err
        })?;

        let percent = self.rng.draw_percent();
        let new_market_value = appreciate(player.market_value, percent);

        self.players
            .transfer_to_team(player.id, buyer_team.id)
            .await
            .map_err(|err| {
                tracing::error!(player_id = %player.id, error = %err, "failed to transfer player");
                err
            })?;

        self.players
            .update_market_value(player.id, new_market_value)
            .await
            .map_err(|err| {
                tracing::error!(player_id = %player.id, error = %err, "failed to update player market value");
                err
            })?;

        let new_buyer_budget = buyer_team.budget - transfer.asking_price;

        self.teams
            .update_budget(buyer_team.id, new_buyer_budget)
            .await
            .map_err(|err| {
                tracing::error!(team_id = %buyer_team.id, error = %err, "failed to update buyer budget");
                err
            })?;

        let new_seller_budget = seller_team.budget + transfer.asking_price;

        self.teams
            .update_budget(seller_team.id, new_seller_budget)
            .await
            .map_err(|err| {
                tracing::error!(team_id = %seller_team.id, error = %err, "failed to update seller budget");
                err
            })?;

        // Conditional on status = active; a concurrent buyer that lost the
        // race surfaces here as TransferNotActive.
        self.transfers
            .complete(transfer.id, buyer_team.id)
            .await
            .map_err(|err| {
                tracing::error!(%transfer_id, error = %err, "failed to complete transfer");
                err
            })?;

        if let Err(err) = self.cache.invalidate(user_id).await {
            tracing::warn!(%user_id, error = %err, "failed to invalidate buyer team cache");
        }

        if let Err(err) = self.cache.invalidate(seller_team.user_id).await {
            tracing::warn!(user_id = %seller_team.user_id, error = %err, "failed to invalidate seller team cache");
        }

        tracing::info!(
            player_id = %player.id,
            buyer_team = %buyer_team.name,
            seller_team = %seller_team.name,
            price = transfer.asking_price,
            new_market_value,
            "player purchased"
        );

        Ok(())
    }
}
