/// Зазор между нижней гранью кнопки и списком, px
pub const OVERLAY_OFFSET: f64 = 4.0;

/// Минимальная ширина списка статусов, px
pub const STATUS_MIN_WIDTH: f64 = 200.0;

/// Вариант выпадающего списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownVariant {
    /// Обычный выбор значения: ширина списка равна ширине кнопки
    Plain,
    /// Выбор статуса: список шире кнопки, чтобы поместились длинные названия
    Status,
}

impl DropdownVariant {
    pub fn width_scale(self) -> f64 {
        match self {
            DropdownVariant::Plain => 1.0,
            DropdownVariant::Status => 1.5,
        }
    }

    pub fn min_width(self) -> f64 {
        match self {
            DropdownVariant::Plain => 0.0,
            DropdownVariant::Status => STATUS_MIN_WIDTH,
        }
    }
}

/// Прямоугольник кнопки в координатах viewport (`getBoundingClientRect`)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
}

/// Прокрутка документа (`window.scrollX/scrollY`)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// Положение списка в координатах документа
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayPosition {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

impl OverlayPosition {
    pub fn compute(anchor: AnchorRect, scroll: ScrollOffset, variant: DropdownVariant) -> Self {
        Self {
            top: anchor.bottom + scroll.y + OVERLAY_OFFSET,
            left: anchor.left + scroll.x,
            width: (anchor.width * variant.width_scale()).max(variant.min_width()),
        }
    }

    /// Inline-стиль для контейнера, смонтированного в `<body>`
    pub fn to_style(&self) -> String {
        format!(
            "position: absolute; top: {}px; left: {}px; width: {}px; z-index: 2000;",
            self.top, self.left, self.width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: AnchorRect = AnchorRect {
        left: 120.0,
        bottom: 340.0,
        width: 160.0,
    };

    #[test]
    fn top_and_left_follow_anchor_in_document_coordinates() {
        let scroll = ScrollOffset { x: 15.0, y: 600.0 };
        for variant in [DropdownVariant::Plain, DropdownVariant::Status] {
            let pos = OverlayPosition::compute(ANCHOR, scroll, variant);
            assert_eq!(pos.top, 340.0 + 600.0 + OVERLAY_OFFSET);
            assert_eq!(pos.left, 135.0);
        }
    }

    #[test]
    fn plain_width_equals_anchor_width() {
        let pos = OverlayPosition::compute(ANCHOR, ScrollOffset::default(), DropdownVariant::Plain);
        assert_eq!(pos.width, 160.0);

        let narrow = AnchorRect { width: 40.0, ..ANCHOR };
        let pos = OverlayPosition::compute(narrow, ScrollOffset::default(), DropdownVariant::Plain);
        assert_eq!(pos.width, 40.0);
    }

    #[test]
    fn status_width_is_scaled_with_floor() {
        let pos = OverlayPosition::compute(ANCHOR, ScrollOffset::default(), DropdownVariant::Status);
        assert_eq!(pos.width, 240.0);

        let narrow = AnchorRect { width: 100.0, ..ANCHOR };
        let pos = OverlayPosition::compute(narrow, ScrollOffset::default(), DropdownVariant::Status);
        assert_eq!(pos.width, 200.0);
    }

    #[test]
    fn style_is_absolute() {
        let pos = OverlayPosition {
            top: 10.5,
            left: 20.0,
            width: 200.0,
        };
        assert_eq!(
            pos.to_style(),
            "position: absolute; top: 10.5px; left: 20px; width: 200px; z-index: 2000;"
        );
    }
}
