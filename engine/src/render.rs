use crate::{geometry::Color, host::DrawContext, sim::World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub map: Color,
    pub player: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_hex(0x222831),
            map: Color::from_hex(0x30475E),
            player: Color::from_hex(0xF05454),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SceneRenderer {
    palette: Palette,
}

impl SceneRenderer {
    /// Clears, fills the map and then the player, and presents.
    pub fn draw<C: DrawContext + ?Sized>(&self, ctx: &mut C, world: &World) {
        ctx.set_draw_color(self.palette.background);
        ctx.clear();

        ctx.set_draw_color(self.palette.map);
        ctx.fill_rect(world.map);

        ctx.set_draw_color(self.palette.player);
        ctx.fill_rect(world.player);

        ctx.present();
    }
}
