//! Light sources. Every variant answers `intensity_at` with a non-negative
//! scalar; positional variants also provide the direction and distance the
//! shading loop needs for its shadow ray.

use std::f32::consts::PI;

use crate::shapes::Shape;
use crate::{Point3f, Vector3f};

#[derive(Debug, Clone)]
pub struct PointLight {
    pub position: Point3f,
    pub intensity: f32,
    /// Extra distance attenuation on top of the inverse-square law;
    /// disabled when <= 0.
    pub falloff: f32,
}

#[derive(Debug, Clone)]
pub struct AmbientLight {
    pub intensity: f32,
}

#[derive(Debug, Clone)]
pub struct DirectionalLight {
    pub direction: Vector3f,
    pub intensity: f32,
}

#[derive(Debug, Clone)]
pub struct SpotLight {
    pub position: Point3f,
    pub direction: Vector3f,
    /// Half-angle of the cone, in radians.
    pub cone_angle: f32,
    pub intensity: f32,
    pub falloff: f32,
}

#[derive(Debug, Clone)]
pub struct AreaLight {
    pub surface: Shape,
    pub intensity: f32,
}

#[derive(Debug, Clone)]
pub enum Light {
    Point(PointLight),
    Ambient(AmbientLight),
    Directional(DirectionalLight),
    Spot(SpotLight),
    Area(AreaLight),
}

/// Inverse-square attenuation with the optional linear-falloff divisor.
fn attenuate(intensity: f32, r2: f32, falloff: f32) -> f32 {
    if r2 < 1e-8 {
        return 0.0;
    }
    let inv_square = intensity / (4.0 * PI * r2);
    if falloff > 0.0 {
        inv_square / (1.0 + falloff * r2)
    } else {
        inv_square
    }
}

impl Light {
    pub fn point(position: Point3f, intensity: f32) -> Light {
        Light::Point(PointLight {
            position,
            intensity,
            falloff: 0.0,
        })
    }

    pub fn ambient(intensity: f32) -> Light {
        Light::Ambient(AmbientLight { intensity })
    }

    pub fn directional(direction: Vector3f, intensity: f32) -> Light {
        Light::Directional(DirectionalLight {
            direction: direction.normalize(),
            intensity,
        })
    }

    pub fn spot(position: Point3f, direction: Vector3f, cone_angle: f32, intensity: f32) -> Light {
        Light::Spot(SpotLight {
            position,
            direction: direction.normalize(),
            cone_angle,
            intensity,
            falloff: 0.0,
        })
    }

    pub fn area(surface: Shape, intensity: f32) -> Light {
        Light::Area(AreaLight { surface, intensity })
    }

    pub fn is_ambient(&self) -> bool {
        matches!(self, Light::Ambient(_))
    }

    /// Illumination arriving at `point` from this light, ignoring occlusion.
    pub fn intensity_at(&self, point: Point3f) -> f32 {
        match self {
            Light::Point(l) => {
                let r2 = (point - l.position).length_squared();
                attenuate(l.intensity, r2, l.falloff)
            }
            Light::Ambient(l) => l.intensity,
            Light::Directional(l) => l.intensity,
            Light::Spot(l) => {
                let to_point = (point - l.position).normalize();
                let spot = l.direction.dot(to_point);
                if spot <= l.cone_angle.cos() {
                    return 0.0;
                }
                let r2 = (point - l.position).length_squared();
                attenuate(l.intensity, r2, l.falloff) * spot
            }
            Light::Area(l) => {
                let r2 = (point - l.surface.centroid()).length_squared();
                attenuate(l.intensity, r2, 0.0)
            }
        }
    }

    /// Unit direction from `from` towards the light, and the distance to it.
    /// Directional lights are infinitely far away.
    pub fn direction_and_distance(&self, from: Point3f) -> (Vector3f, f32) {
        match self {
            Light::Point(l) => to_light(from, l.position),
            Light::Spot(l) => to_light(from, l.position),
            Light::Area(l) => to_light(from, l.surface.centroid()),
            Light::Directional(l) => (-l.direction, f32::INFINITY),
            Light::Ambient(_) => (Vector3f::zero(), 0.0),
        }
    }

    pub fn translate(&mut self, offset: Vector3f) {
        match self {
            Light::Point(l) => l.position += offset,
            Light::Spot(l) => l.position += offset,
            Light::Ambient(_) | Light::Directional(_) | Light::Area(_) => {}
        }
    }
}

fn to_light(from: Point3f, position: Point3f) -> (Vector3f, f32) {
    let to = position - from;
    let dist = to.length();
    if dist > 0.0 {
        (to / dist, dist)
    } else {
        (Vector3f::zero(), 0.0)
    }
}
