use crate::{domain::skin::shape::ShapeVariant, services::compositor};

pub fn render_skin_preview(bytes: Vec<u8>, shape: ShapeVariant) -> Result<Vec<u8>, String> {
    compositor::composite_png(&bytes, shape).map_err(|err| err.to_string())
}

pub fn render_skin_preview_data_url(bytes: Vec<u8>, shape: ShapeVariant) -> Result<String, String> {
    let png = render_skin_preview(bytes, shape)?;
    Ok(compositor::png_data_url(&png))
}

#[cfg(test)]
mod tests {
    use super::{render_skin_preview, render_skin_preview_data_url};
    use crate::{domain::skin::shape::ShapeVariant, services::texture::test_support::png_of_size};

    #[test]
    fn preview_has_thumbnail_dimensions() {
        let png = render_skin_preview(png_of_size(64, 32), ShapeVariant::Slim).unwrap();

        let preview = image::load_from_memory(&png).unwrap();
        assert_eq!((preview.width(), preview.height()), (14, 32));
    }

    #[test]
    fn all_three_grids_render() {
        for (width, height) in [(64, 32), (64, 64), (128, 128)] {
            assert!(render_skin_preview(png_of_size(width, height), ShapeVariant::Standard).is_ok());
        }
    }

    #[test]
    fn rejection_message_names_the_dimensions() {
        let err = render_skin_preview(png_of_size(100, 50), ShapeVariant::Standard).unwrap_err();

        assert!(err.starts_with("Invalid skin format."), "{err}");
        assert!(err.contains("100x50"));
    }

    #[test]
    fn data_url_wraps_png() {
        let url = render_skin_preview_data_url(png_of_size(64, 64), ShapeVariant::Standard).unwrap();

        assert!(url.starts_with("data:image/png;base64,"));
        assert!(render_skin_preview_data_url(vec![1, 2, 3], ShapeVariant::Standard).is_err());
    }
}
